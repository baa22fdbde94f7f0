use crate::app::{FlashlightApp, Mode};

/// Opacities for this frame, eased toward the current panel state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacities {
    pub circle: f32,
    pub overlay: f32,
    pub panel: f32,
}

impl FlashlightApp {
    pub fn animate_opacities(&self, ctx: &egui::Context) -> Opacities {
        let timing = self.settings.animation;
        let flash = self.state.mode() == Mode::Flash;

        let circle = ctx.animate_value_with_time(
            egui::Id::new("circle_opacity"),
            self.state.brightness(),
            timing.circle_secs,
        );
        let overlay = ctx.animate_value_with_time(
            egui::Id::new("overlay_opacity"),
            if flash { 1.0 } else { 0.0 },
            timing.overlay_secs,
        );
        let panel = ctx.animate_value_with_time(
            egui::Id::new("panel_opacity"),
            if flash { 0.0 } else { 1.0 },
            timing.overlay_secs,
        );

        Opacities { circle, overlay, panel }
    }
}
