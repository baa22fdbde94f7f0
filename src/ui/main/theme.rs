use crate::settings::Settings;

pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    let background = settings.theme.background();
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = background;
    visuals.window_fill = background;
    visuals.extreme_bg_color = background;
    ctx.set_visuals(visuals);
}
