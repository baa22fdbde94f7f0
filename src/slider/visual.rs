//! Fill extent for a slider's indicator bar.

use super::geometry::{ratio_for_value, Orientation};
use egui::{pos2, Rect};

/// Edge of the track the fill grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillAnchor {
    /// Vertical tracks fill upward from the bottom edge.
    Bottom,
    /// Horizontal tracks fill rightward from the left edge.
    Start,
}

impl From<Orientation> for FillAnchor {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => FillAnchor::Start,
            Orientation::Vertical => FillAnchor::Bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillExtent {
    pub ratio: f32,
    pub length: f32,
    pub anchor: FillAnchor,
}

impl FillExtent {
    /// Forward mapping only: the same value always gives the same fill,
    /// whichever way it was set.
    pub fn compute(
        value: f32,
        min: f32,
        max: f32,
        track_length: f32,
        orientation: Orientation,
    ) -> Self {
        let ratio = ratio_for_value(value, min, max);
        Self {
            ratio,
            length: track_length * ratio,
            anchor: orientation.into(),
        }
    }

    /// Fill rect inside `track` for this extent's own length.
    pub fn rect_in(&self, track: Rect) -> Rect {
        self.rect_with_length(track, self.length)
    }

    /// Fill rect for an arbitrary length, used while the bar animates.
    pub fn rect_with_length(&self, track: Rect, length: f32) -> Rect {
        match self.anchor {
            FillAnchor::Bottom => {
                let length = length.clamp(0.0, track.height());
                Rect::from_min_max(pos2(track.left(), track.bottom() - length), track.max)
            }
            FillAnchor::Start => {
                let length = length.clamp(0.0, track.width());
                Rect::from_min_max(track.min, pos2(track.left() + length, track.bottom()))
            }
        }
    }
}
