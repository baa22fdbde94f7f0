use crate::app::Mode;
use egui::{self, Color32, CornerRadius, RichText, Vec2};

const BUTTON_SIZE: f32 = 60.0;
const GLYPH_SIZE: f32 = 30.0;
const GLYPH_ON: &str = "🔦";
const GLYPH_OFF: &str = "⏻";

/// Glyph and tint for the button in the given mode.
pub fn mode_glyph(mode: Mode) -> (&'static str, Color32) {
    match mode {
        Mode::Control => (GLYPH_ON, Color32::WHITE),
        Mode::Flash => (GLYPH_OFF, Color32::BLACK),
    }
}

/// Round translucent toggle. Returns true when clicked.
pub fn mode_button(ui: &mut egui::Ui, mode: Mode) -> bool {
    let (glyph, tint) = mode_glyph(mode);
    ui.add(
        egui::Button::new(RichText::new(glyph).size(GLYPH_SIZE).color(tint))
            .fill(Color32::from_white_alpha(51))
            .stroke(egui::Stroke::NONE)
            .corner_radius(CornerRadius::same((BUTTON_SIZE / 2.0) as u8))
            .min_size(Vec2::splat(BUTTON_SIZE)),
    )
    .clicked()
}
