use egui::{Color32, CornerRadius, Painter, Rect};

/// Full-screen white wash shown in flash mode. Skipped entirely once faded out.
pub fn paint_flash_overlay(painter: &Painter, screen: Rect, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    painter.rect_filled(
        screen,
        CornerRadius::ZERO,
        Color32::WHITE.gamma_multiply(opacity.min(1.0)),
    );
}
