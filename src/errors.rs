use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Invalid slider bounds: max ({max}) is below min ({min})")]
    InvalidBounds { min: f32, max: f32 },

    #[error("Slider range from {min} to {max} is too wide to represent")]
    RangeTooWide { min: f32, max: f32 },

    #[error("Slider parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f32 },

    #[error("Track fallback length {fallback} must be positive and at least the usable threshold {threshold}")]
    InvalidTrackFallback { fallback: f32, threshold: f32 },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PanelError>;

impl PanelError {
    /// Returns true if this error is recoverable (user can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PanelError::IoError { .. } | PanelError::JsonError { .. } | PanelError::SettingsError { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            PanelError::InvalidBounds { .. } => "Swap the slider's min and max values in settings.json.",
            PanelError::RangeTooWide { .. } => "Narrow the slider's min and max values in settings.json.",
            PanelError::NonFiniteParameter { .. } => "Replace the value with a finite number in settings.json.",
            PanelError::InvalidTrackFallback { .. } => "Raise track.fallback_length above track.min_usable_length.",
            PanelError::SettingsError { .. } | PanelError::JsonError { .. } => {
                "Delete settings.json to restore the defaults."
            }
            PanelError::IoError { .. } => "Check permissions on the configuration directory.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PanelError::InvalidBounds { .. } => "INVALID_BOUNDS",
            PanelError::RangeTooWide { .. } => "RANGE_TOO_WIDE",
            PanelError::NonFiniteParameter { .. } => "NON_FINITE_PARAMETER",
            PanelError::InvalidTrackFallback { .. } => "INVALID_TRACK_FALLBACK",
            PanelError::SettingsError { .. } => "SETTINGS_ERROR",
            PanelError::IoError { .. } => "IO_ERROR",
            PanelError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Logs the error with its code
    pub fn log(&self) {
        if self.is_recoverable() {
            log::warn!("[{}] {}", self.error_code(), self);
        } else {
            log::error!("[{}] {}", self.error_code(), self);
        }
    }
}
