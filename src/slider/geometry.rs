//! Pointer-to-value mapping for panel sliders.
//!
//! Everything here is pure: one pointer sample in, one clamped value out.

use serde::{Deserialize, Serialize};

/// Track length substituted when a pointer sample arrives before any usable
/// length is known (zero, negative or NaN).
pub const POINTER_FALLBACK_LENGTH: f32 = 300.0;

/// Primary axis of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    /// Picks the component of a local pointer position along this axis.
    pub fn primary(self, local: egui::Vec2) -> f32 {
        match self {
            Orientation::Horizontal => local.x,
            Orientation::Vertical => local.y,
        }
    }

    /// Extent of a rect along this axis.
    pub fn extent_of(self, rect: egui::Rect) -> f32 {
        match self {
            Orientation::Horizontal => rect.width(),
            Orientation::Vertical => rect.height(),
        }
    }
}

/// Position of `value` inside `[min, max]` as a ratio in `[0, 1]`.
/// A degenerate range (`max <= min`) always yields 0.
///
/// Works in f64 so spans wider than `f32::MAX` stay finite.
pub fn ratio_for_value(value: f32, min: f32, max: f32) -> f32 {
    if is_degenerate(min, max) {
        return 0.0;
    }
    let span = f64::from(max) - f64::from(min);
    let ratio = ((f64::from(value) - f64::from(min)) / span) as f32;
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Inverse of [`ratio_for_value`], clamped to `[min, max]` to absorb rounding.
pub fn value_for_ratio(ratio: f32, min: f32, max: f32) -> f32 {
    if is_degenerate(min, max) {
        return min;
    }
    let span = f64::from(max) - f64::from(min);
    let value = (f64::from(min) + span * f64::from(ratio)) as f32;
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Ratio for a pointer coordinate measured from the top-left of the track.
///
/// Vertical tracks are inverted so the top of the track is full.
pub fn pointer_ratio(coordinate: f32, track_length: f32, orientation: Orientation) -> f32 {
    let length = usable_length(track_length);
    let coordinate = if coordinate.is_nan() { 0.0 } else { coordinate };
    let along = coordinate.clamp(0.0, length) / length;
    match orientation {
        Orientation::Horizontal => along,
        Orientation::Vertical => 1.0 - along,
    }
}

/// Maps one pointer sample to a value in `[min, max]`.
pub fn map_pointer(
    coordinate: f32,
    track_length: f32,
    min: f32,
    max: f32,
    orientation: Orientation,
) -> f32 {
    if is_degenerate(min, max) {
        return min;
    }
    value_for_ratio(pointer_ratio(coordinate, track_length, orientation), min, max)
}

/// Equal, inverted or NaN bounds leave nothing to map onto.
fn is_degenerate(min: f32, max: f32) -> bool {
    min.is_nan() || max.is_nan() || max <= min
}

fn usable_length(track_length: f32) -> f32 {
    if track_length > 0.0 && track_length.is_finite() {
        track_length
    } else {
        POINTER_FALLBACK_LENGTH
    }
}
