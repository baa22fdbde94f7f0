use egui::{Color32, Painter, Pos2};

pub const CIRCLE_COLOR: Color32 = Color32::WHITE;

/// Paints the illuminated circle. `opacity` is the brightness in `[0, 1]`.
pub fn paint_circle(painter: &Painter, center: Pos2, diameter: f32, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if diameter <= 0.0 || opacity <= 0.0 {
        return;
    }
    painter.circle_filled(center, diameter / 2.0, CIRCLE_COLOR.gamma_multiply(opacity));
}
