//! Continuous-value slider model used by the light panel.
//!
//! A [`Slider`] owns its value, bounds and orientation. Pointer samples go
//! through [`geometry::map_pointer`], then the label and fill are refreshed
//! and the change callback fires. Layout passes only ever touch the track
//! length, so resizing never moves the value.

pub mod geometry;
pub mod presenter;
pub mod track;
pub mod visual;

pub use geometry::Orientation;
pub use presenter::LabelFormat;
pub use track::{TrackLength, TrackPolicy};
pub use visual::{FillAnchor, FillExtent};

use crate::errors::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Receives every value produced by a drag, tap or reset.
pub type ChangeCallback = Box<dyn FnMut(f32)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Construction options for a [`Slider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub label_format: LabelFormat,
    #[serde(default)]
    pub track: TrackPolicy,
}

impl SliderConfig {
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        Self {
            value,
            min,
            max,
            orientation: Orientation::default(),
            label_format: LabelFormat::for_range(min, max),
            track: TrackPolicy::default(),
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn label_format(mut self, label_format: LabelFormat) -> Self {
        self.label_format = label_format;
        self
    }

    pub fn track_policy(mut self, track: TrackPolicy) -> Self {
        self.track = track;
        self
    }

    /// Rejects bounds and thresholds the model cannot honor.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("min", self.min), ("max", self.max), ("value", self.value)] {
            if !value.is_finite() {
                return Err(PanelError::NonFiniteParameter { name, value });
            }
        }
        if self.max < self.min {
            return Err(PanelError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.max - self.min).is_finite() {
            return Err(PanelError::RangeTooWide {
                min: self.min,
                max: self.max,
            });
        }
        self.track.validate()
    }

    pub fn build(self, on_change: impl FnMut(f32) + 'static) -> Result<Slider> {
        let mut slider = self.build_detached()?;
        slider.on_change = Some(Box::new(on_change));
        Ok(slider)
    }

    /// Builds a slider without a change callback.
    pub fn build_detached(self) -> Result<Slider> {
        self.validate()?;

        let value = self.value.clamp(self.min, self.max);
        if value != self.value {
            tracing::debug!(requested = self.value, value, "initial slider value clamped into range");
        }

        let track = TrackLength::new(self.track);
        let label = self.label_format.format(value);
        let fill = FillExtent::compute(value, self.min, self.max, track.get(), self.orientation);

        Ok(Slider {
            value,
            initial: value,
            min: self.min,
            max: self.max,
            orientation: self.orientation,
            label_format: self.label_format,
            track,
            state: DragState::Idle,
            label,
            fill,
            on_change: None,
        })
    }
}

pub struct Slider {
    value: f32,
    initial: f32,
    min: f32,
    max: f32,
    orientation: Orientation,
    label_format: LabelFormat,
    track: TrackLength,
    state: DragState,
    label: String,
    fill: FillExtent,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("orientation", &self.orientation)
            .field("track_length", &self.track.get())
            .field("state", &self.state)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl Slider {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn initial_value(&self) -> f32 {
        self.initial
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn label_format(&self) -> &LabelFormat {
        &self.label_format
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    pub fn ratio(&self) -> f32 {
        self.fill.ratio
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fill(&self) -> FillExtent {
        self.fill
    }

    pub fn track_length(&self) -> f32 {
        self.track.get()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    pub fn set_on_change(&mut self, on_change: impl FnMut(f32) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Called by the hosting layout on every pass. Re-derives the fill from
    /// the current value; the value itself is never touched.
    pub fn set_track_length(&mut self, length: f32) {
        if self.track.set(length) {
            self.sync_visuals();
        }
    }

    pub fn begin_drag(&mut self) {
        if self.state == DragState::Idle {
            tracing::trace!(value = self.value, "slider drag started");
            self.state = DragState::Dragging;
        }
    }

    /// Applies one pointer sample along the primary axis, measured from the
    /// track's top-left corner. Each sample commits immediately.
    pub fn drag_to(&mut self, coordinate: f32) -> f32 {
        self.begin_drag();
        let value = geometry::map_pointer(
            coordinate,
            self.track.get(),
            self.min,
            self.max,
            self.orientation,
        );
        tracing::trace!(coordinate, track_length = self.track.get(), value, "slider pointer sample");
        self.commit(value);
        value
    }

    /// Leaves the drag session. The last sample stays committed.
    pub fn end_drag(&mut self) {
        if self.state == DragState::Dragging {
            tracing::trace!(value = self.value, "slider drag ended");
            self.state = DragState::Idle;
        }
    }

    /// A tap is a drag with a single sample.
    pub fn tap(&mut self, coordinate: f32) -> f32 {
        self.begin_drag();
        let value = self.drag_to(coordinate);
        self.end_drag();
        value
    }

    /// Returns to the value the slider was created with.
    pub fn reset(&mut self) -> f32 {
        let initial = self.initial;
        self.commit(initial);
        initial
    }

    fn commit(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
        self.sync_visuals();
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.value);
        }
    }

    fn sync_visuals(&mut self) {
        self.label = self.label_format.format(self.value);
        self.fill = FillExtent::compute(
            self.value,
            self.min,
            self.max,
            self.track.get(),
            self.orientation,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(config: SliderConfig) -> (Slider, Rc<RefCell<Vec<f32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let slider = config.build(move |v| sink.borrow_mut().push(v)).unwrap();
        (slider, seen)
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = SliderConfig::new(5.0, 10.0, 0.0).build_detached().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_BOUNDS");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        let err = SliderConfig::new(f32::NAN, 0.0, 1.0).build_detached().unwrap_err();
        assert!(matches!(err, PanelError::NonFiniteParameter { name: "value", .. }));
        let err = SliderConfig::new(0.0, 0.0, f32::INFINITY).build_detached().unwrap_err();
        assert!(matches!(err, PanelError::NonFiniteParameter { name: "max", .. }));
    }

    #[test]
    fn test_initial_value_is_clamped() {
        let slider = SliderConfig::new(1200.0, 50.0, 900.0).build_detached().unwrap();
        assert_eq!(slider.value(), 900.0);
        assert_eq!(slider.initial_value(), 900.0);
        assert_eq!(slider.label(), "900");
    }

    #[test]
    fn test_every_sample_fires_callback_in_order() {
        let config = SliderConfig::new(0.0, 0.0, 100.0).orientation(Orientation::Horizontal);
        let (mut slider, seen) = recording(config);
        slider.set_track_length(200.0);

        slider.drag_to(20.0);
        slider.drag_to(100.0);
        slider.drag_to(100.0);
        slider.end_drag();

        assert_eq!(*seen.borrow(), vec![10.0, 50.0, 50.0]);
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn test_drag_state_transitions() {
        let mut slider = SliderConfig::new(0.5, 0.0, 1.0).build_detached().unwrap();
        assert_eq!(slider.state(), DragState::Idle);

        slider.drag_to(10.0);
        assert!(slider.is_dragging());

        slider.end_drag();
        assert_eq!(slider.state(), DragState::Idle);

        slider.tap(0.0);
        assert_eq!(slider.state(), DragState::Idle);
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn test_end_drag_does_not_notify() {
        let (mut slider, seen) = recording(SliderConfig::new(0.5, 0.0, 1.0));
        slider.begin_drag();
        slider.end_drag();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_resize_keeps_value_and_rescales_fill() {
        let (mut slider, seen) = recording(SliderConfig::new(300.0, 50.0, 900.0));
        slider.set_track_length(500.0);
        slider.drag_to(250.0);
        let value = slider.value();

        slider.set_track_length(250.0);
        assert_eq!(slider.value(), value);
        assert_eq!(slider.fill().length, 250.0 * slider.ratio());

        slider.set_track_length(0.0);
        assert_eq!(slider.value(), value);
        assert_eq!(slider.track_length(), track::DEFAULT_FALLBACK_LENGTH);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_label_follows_value() {
        let config = SliderConfig::new(1.0, 0.1, 1.0);
        let mut slider = config.build_detached().unwrap();
        assert_eq!(slider.label(), "100%");
        slider.set_track_length(400.0);
        slider.drag_to(400.0);
        assert_eq!(slider.label(), "10%");
    }

    #[test]
    fn test_reset_returns_to_initial_and_notifies() {
        let (mut slider, seen) = recording(SliderConfig::new(300.0, 50.0, 900.0));
        slider.set_track_length(500.0);
        slider.tap(0.0);
        assert_eq!(slider.value(), 900.0);

        assert_eq!(slider.reset(), 300.0);
        assert_eq!(slider.value(), 300.0);
        assert_eq!(*seen.borrow(), vec![900.0, 300.0]);
    }

    #[test]
    fn test_debug_omits_callback() {
        let slider = SliderConfig::new(0.5, 0.0, 1.0).build(|_| {}).unwrap();
        let text = format!("{:?}", slider);
        assert!(text.contains("value: 0.5"));
    }
}
