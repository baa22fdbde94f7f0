use crate::slider::{Orientation, Slider};
use egui::{self, Align2, Color32, CornerRadius, FontId, Rect, Sense, Vec2};

const TRACK_RADIUS: u8 = 12;
const INFO_BOTTOM_MARGIN: f32 = 15.0;
const INFO_SPACING: f32 = 5.0;
const LABEL_SIZE: f32 = 12.0;
const GLYPH_SIZE: f32 = 20.0;

pub const TRACK_COLOR: Color32 = Color32::from_rgba_premultiplied(36, 36, 36, 38);
pub const FILL_COLOR: Color32 = Color32::from_rgba_premultiplied(204, 204, 204, 204);
pub const INFO_COLOR: Color32 = Color32::WHITE;

pub struct PanelSliderStyle {
    /// Preferred length along the primary axis; shrinks to fit the available space.
    pub extent: f32,
    pub thickness: f32,
    pub fill_secs: f32,
    /// When false the slider is drawn but ignores the pointer.
    pub interactive: bool,
}

/// Draws a panel slider and feeds pointer input into its model.
pub fn panel_slider(
    ui: &mut egui::Ui,
    slider: &mut Slider,
    glyph: &str,
    style: &PanelSliderStyle,
) -> egui::Response {
    let size = match slider.orientation() {
        Orientation::Vertical => Vec2::new(style.thickness, style.extent.min(ui.available_height())),
        Orientation::Horizontal => Vec2::new(style.extent.min(ui.available_width()), style.thickness),
    };
    let sense = if style.interactive {
        Sense::click_and_drag()
    } else {
        Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    // Layout pass: only the track length follows the rect
    slider.set_track_length(slider.orientation().extent_of(rect));

    handle_pointer(slider, &response, rect);
    paint(ui, slider, glyph, rect, response.id, style.fill_secs);

    response
}

fn handle_pointer(slider: &mut Slider, response: &egui::Response, rect: Rect) {
    let coordinate = response
        .interact_pointer_pos()
        .map(|pos| slider.orientation().primary(pos - rect.min));

    if response.double_clicked() {
        slider.reset();
        return;
    }

    if let Some(coordinate) = coordinate {
        if response.drag_started() {
            slider.begin_drag();
            slider.drag_to(coordinate);
        } else if response.dragged() && response.drag_delta() != Vec2::ZERO {
            slider.drag_to(coordinate);
        } else if response.clicked() {
            slider.tap(coordinate);
        }
    }

    if response.drag_stopped() {
        slider.end_drag();
    }
}

fn paint(ui: &egui::Ui, slider: &Slider, glyph: &str, rect: Rect, id: egui::Id, fill_secs: f32) {
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::same(TRACK_RADIUS), TRACK_COLOR);

    let fill = slider.fill();
    let shown = ui.ctx().animate_value_with_time(id.with("fill"), fill.length, fill_secs);
    let fill_rect = fill.rect_with_length(rect, shown);
    if fill_rect.width() > 0.0 && fill_rect.height() > 0.0 {
        painter.rect_filled(fill_rect, CornerRadius::same(TRACK_RADIUS), FILL_COLOR);
    }

    // Info column: label above glyph, pinned near the bottom edge
    let glyph_bottom = egui::pos2(rect.center().x, rect.bottom() - INFO_BOTTOM_MARGIN);
    let glyph_rect = painter.text(
        glyph_bottom,
        Align2::CENTER_BOTTOM,
        glyph,
        FontId::proportional(GLYPH_SIZE),
        INFO_COLOR,
    );
    painter.text(
        egui::pos2(rect.center().x, glyph_rect.top() - INFO_SPACING),
        Align2::CENTER_BOTTOM,
        slider.label(),
        FontId::proportional(LABEL_SIZE),
        INFO_COLOR,
    );
}
