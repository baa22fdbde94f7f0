use crate::errors::{PanelError, Result};
use crate::slider::{LabelFormat, Orientation, SliderConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Appearance
    pub theme: Theme,

    // Window state
    pub window_size: (f32, f32),

    // Diagnostics
    pub debug_logging: bool,

    // Slider panel layout
    /// Preferred length of each slider along its primary axis.
    pub slider_extent: f32,
    pub slider_thickness: f32,
    pub panel_spacing: f32,
    pub panel_margin: f32,

    // Sliders
    pub brightness_slider: SliderConfig,
    pub size_slider: SliderConfig,

    // Animation
    pub animation: AnimationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Oled,

            window_size: (900.0, 700.0),

            debug_logging: false,

            slider_extent: 500.0,
            slider_thickness: 70.0,
            panel_spacing: 20.0,
            panel_margin: 30.0,

            brightness_slider: SliderConfig::new(1.0, 0.1, 1.0)
                .orientation(Orientation::Vertical)
                .label_format(LabelFormat::Percent),
            size_slider: SliderConfig::new(300.0, 50.0, 900.0)
                .orientation(Orientation::Vertical)
                .label_format(LabelFormat::Integer),

            animation: AnimationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Oled,
}

impl Theme {
    pub fn background(self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_rgb(18, 18, 20),
            Theme::Oled => egui::Color32::BLACK,
        }
    }
}

/// Durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub fill_secs: f32,
    pub circle_secs: f32,
    pub overlay_secs: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            fill_secs: 0.1,
            circle_secs: 0.2,
            overlay_secs: 0.3,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "flashpanel", "FlashPanel")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Reads the stored settings, if any. `Ok(None)` means nothing is stored yet.
    pub fn load_stored() -> Result<Option<Self>> {
        let path = Self::config_path().ok_or_else(|| PanelError::SettingsError {
            message: "no config directory available".to_string(),
        })?;
        if !path.exists() {
            return Ok(None);
        }
        Self::try_load_from(&path).map(Some)
    }

    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| PanelError::SettingsError {
            message: "no config directory available".to_string(),
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::debug!("Settings written to {}", path.display());
        Ok(())
    }

    /// Checks everything the panel needs before any widget is built.
    pub fn validate(&self) -> Result<()> {
        self.brightness_slider.validate()?;
        self.size_slider.validate()?;

        let layout = [
            ("slider_extent", self.slider_extent),
            ("slider_thickness", self.slider_thickness),
            ("panel_spacing", self.panel_spacing),
            ("panel_margin", self.panel_margin),
        ];
        for (name, value) in layout {
            if !value.is_finite() || value < 0.0 {
                return Err(PanelError::SettingsError {
                    message: format!("{} must be a non-negative number, got {}", name, value),
                });
            }
        }
        Ok(())
    }
}
