use eframe::egui;
use flashpanel::app::FlashlightApp;
use flashpanel::errors::PanelError;
use flashpanel::logging;
use flashpanel::settings::Settings;

fn main() -> eframe::Result<()> {
    let stored = Settings::load_stored();
    let debug = matches!(&stored, Ok(Some(settings)) if settings.debug_logging);
    logging::init_tracing(debug);

    let settings = resolve_settings(stored);

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([320.0, 480.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "FlashPanel",
        native_options,
        Box::new(|cc| Ok(Box::new(FlashlightApp::new(cc, settings)?))),
    )
}

/// Falls back to the defaults when the stored file is unreadable or does not
/// validate, and writes the defaults out on first launch.
fn resolve_settings(stored: Result<Option<Settings>, PanelError>) -> Settings {
    match stored {
        Ok(Some(settings)) => match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                e.log();
                log::warn!("Using default settings");
                Settings::default()
            }
        },
        Ok(None) => {
            let settings = Settings::default();
            if let Err(e) = write_defaults(&settings) {
                log::warn!("Could not write default settings: {:#}", e);
            }
            settings
        }
        Err(e) => {
            e.log();
            Settings::default()
        }
    }
}

fn write_defaults(settings: &Settings) -> anyhow::Result<()> {
    settings
        .save()
        .map_err(|e| anyhow::anyhow!("{} ({})", e, e.error_code()))
}

fn load_icon() -> egui::IconData {
    // Soft white disc on transparent background
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let cx = x as f32 - size as f32 / 2.0;
            let cy = y as f32 - size as f32 / 2.0;
            let dist = (cx * cx + cy * cy).sqrt();
            let radius = size as f32 / 2.0 - 2.0;

            if dist < radius {
                let t = dist / radius;
                rgba[idx] = 255;
                rgba[idx + 1] = 255;
                rgba[idx + 2] = (255.0 - 40.0 * t) as u8;
                rgba[idx + 3] = (255.0 * (1.0 - 0.5 * t * t)) as u8;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
