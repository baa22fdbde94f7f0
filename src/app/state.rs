use crate::app::panel_state::{PanelState, PanelUpdate};
use crate::errors::Result;
use crate::settings::Settings;
use crate::slider::{Slider, SliderConfig};

use std::sync::mpsc::{channel, Receiver, Sender};

pub struct FlashlightApp {
    // Settings
    pub settings: Settings,

    // Screen state
    pub state: PanelState,

    // Sliders
    pub brightness_slider: Slider,
    pub size_slider: Slider,

    // Slider and button changes, drained once per frame
    pub update_tx: Sender<PanelUpdate>,
    pub update_rx: Receiver<PanelUpdate>,

    // Context for repaint requests
    pub ctx: Option<egui::Context>,
}

impl FlashlightApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self> {
        crate::ui::main::theme::apply_theme(&cc.egui_ctx, &settings);
        let mut app = Self::from_settings(settings)?;
        app.ctx = Some(cc.egui_ctx.clone());
        Ok(app)
    }

    /// Builds the controller without a window, validating every slider.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let (tx, rx) = channel();
        let brightness_slider = connect(settings.brightness_slider.clone(), &tx, PanelUpdate::Brightness)?;
        let size_slider = connect(settings.size_slider.clone(), &tx, PanelUpdate::Diameter)?;

        let state = PanelState::new(size_slider.value(), brightness_slider.value());
        log::debug!(
            "Panel ready: diameter={} brightness={}",
            state.diameter(),
            state.brightness()
        );

        Ok(Self {
            settings,
            state,
            brightness_slider,
            size_slider,
            update_tx: tx,
            update_rx: rx,
            ctx: None,
        })
    }

    pub fn request_repaint(&self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

fn connect(
    config: SliderConfig,
    tx: &Sender<PanelUpdate>,
    to_update: fn(f32) -> PanelUpdate,
) -> Result<Slider> {
    let tx = tx.clone();
    config.build(move |value| {
        // The receiver lives in the same app, so this only fails during teardown
        let _ = tx.send(to_update(value));
    })
}
