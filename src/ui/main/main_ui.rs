use crate::app::{FlashlightApp, Mode};
use crate::ui::circle::paint_circle;
use crate::ui::flash_overlay::paint_flash_overlay;
use crate::ui::mode_button::mode_button;
use crate::ui::panel_slider::{panel_slider, PanelSliderStyle};
use egui::{self, Align2, Vec2};

const BRIGHTNESS_GLYPH: &str = "☀";
const SIZE_GLYPH: &str = "⬤";
const PANEL_PADDING: f32 = 20.0;

impl eframe::App for FlashlightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ctx = Some(ctx.clone());

        let opacities = self.animate_opacities(ctx);
        let screen = ctx.screen_rect();

        // Areas sit above the central panel whatever order they are shown in,
        // so controls run first and the circle sees this frame's values.
        self.render_slider_panel(ctx, screen, opacities.panel);
        self.render_mode_button(ctx);
        self.process_panel_updates();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.settings.theme.background()))
            .show(ctx, |ui| {
                let painter = ui.painter();
                paint_circle(painter, screen.center(), self.state.diameter(), opacities.circle);
                paint_flash_overlay(painter, screen, opacities.overlay);
            });
    }
}

impl FlashlightApp {
    fn render_slider_panel(&mut self, ctx: &egui::Context, screen: egui::Rect, opacity: f32) {
        if opacity <= 0.0 {
            // Fully faded out in flash mode; make sure no drag session lingers
            self.brightness_slider.end_drag();
            self.size_slider.end_drag();
            return;
        }

        let margin = self.settings.panel_margin;
        let available = (screen.height() - 2.0 * (margin + PANEL_PADDING)).max(0.0);
        let style = PanelSliderStyle {
            extent: self.settings.slider_extent.min(available),
            thickness: self.settings.slider_thickness,
            fill_secs: self.settings.animation.fill_secs,
            interactive: self.state.mode() == Mode::Control,
        };

        egui::Area::new(egui::Id::new("slider_panel"))
            .anchor(Align2::RIGHT_CENTER, Vec2::new(-margin, 0.0))
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                egui::Frame::NONE
                    .inner_margin(egui::Margin::same(PANEL_PADDING as i8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = self.settings.panel_spacing;
                            panel_slider(ui, &mut self.brightness_slider, BRIGHTNESS_GLYPH, &style);
                            panel_slider(ui, &mut self.size_slider, SIZE_GLYPH, &style);
                        });
                    });
            });
    }

    fn render_mode_button(&mut self, ctx: &egui::Context) {
        let inset = self.settings.panel_margin;
        egui::Area::new(egui::Id::new("mode_button"))
            .anchor(Align2::LEFT_TOP, Vec2::new(inset, inset))
            .show(ctx, |ui| {
                if mode_button(ui, self.state.mode()) {
                    self.toggle_mode();
                }
            });
    }
}
