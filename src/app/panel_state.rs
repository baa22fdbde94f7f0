/// What the light panel is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Circle and sliders visible.
    #[default]
    Control,
    /// Full-screen white overlay, sliders hidden.
    Flash,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Control => Mode::Flash,
            Mode::Flash => Mode::Control,
        }
    }
}

/// A single change to the panel, as produced by the sliders and the mode button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelUpdate {
    Diameter(f32),
    Brightness(f32),
    ToggleMode,
}

/// Visuals that must re-render after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Redraw {
    pub circle: bool,
    pub overlay: bool,
}

impl Redraw {
    pub fn merge(self, other: Redraw) -> Redraw {
        Redraw {
            circle: self.circle || other.circle,
            overlay: self.overlay || other.overlay,
        }
    }

    pub fn any(self) -> bool {
        self.circle || self.overlay
    }
}

/// Screen state owned by the controller. Sliders never write here directly;
/// everything goes through [`PanelState::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    diameter: f32,
    brightness: f32,
    mode: Mode,
}

impl PanelState {
    pub fn new(diameter: f32, brightness: f32) -> Self {
        Self {
            diameter,
            brightness,
            mode: Mode::Control,
        }
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn apply(&mut self, update: PanelUpdate) -> Redraw {
        match update {
            PanelUpdate::Diameter(diameter) => {
                self.diameter = diameter;
                Redraw { circle: true, overlay: false }
            }
            PanelUpdate::Brightness(brightness) => {
                self.brightness = brightness;
                Redraw { circle: true, overlay: false }
            }
            PanelUpdate::ToggleMode => {
                self.mode = self.mode.toggled();
                log::info!("Switched to {:?} mode", self.mode);
                Redraw { circle: false, overlay: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_touch_only_their_field() {
        let mut state = PanelState::new(300.0, 1.0);

        let redraw = state.apply(PanelUpdate::Diameter(450.0));
        assert_eq!(redraw, Redraw { circle: true, overlay: false });
        assert_eq!(state.diameter(), 450.0);
        assert_eq!(state.brightness(), 1.0);

        state.apply(PanelUpdate::Brightness(0.4));
        assert_eq!(state.diameter(), 450.0);
        assert_eq!(state.brightness(), 0.4);
        assert_eq!(state.mode(), Mode::Control);
    }

    #[test]
    fn test_toggle_mode_round_trip() {
        let mut state = PanelState::new(300.0, 1.0);
        let redraw = state.apply(PanelUpdate::ToggleMode);
        assert!(redraw.overlay && !redraw.circle);
        assert_eq!(state.mode(), Mode::Flash);

        state.apply(PanelUpdate::ToggleMode);
        assert_eq!(state.mode(), Mode::Control);
    }

    #[test]
    fn test_redraw_merge() {
        let merged = Redraw { circle: true, overlay: false }.merge(Redraw { circle: false, overlay: true });
        assert!(merged.circle && merged.overlay);
        assert!(!Redraw::default().any());
    }
}
