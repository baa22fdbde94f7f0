use serde::{Deserialize, Serialize};

/// Display template for a slider value. Formatting never touches the model.
///
/// Integer and percent labels round to the nearest whole number rather than
/// truncating, so 0.699 reads as `70%` and 299.9 as `300`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum LabelFormat {
    /// Rounded integer, e.g. `300`.
    #[default]
    Integer,
    /// Rounded integer followed by a unit, e.g. `300 px`.
    IntegerWithSuffix(String),
    /// Value scaled by 100 and rounded, e.g. `100%`.
    Percent,
    /// Fixed number of decimal places.
    Decimal { places: usize },
}

impl LabelFormat {
    /// Pixel-style ranges read as integers, unit ranges as percentages.
    pub fn for_range(_min: f32, max: f32) -> Self {
        if max > 10.0 {
            LabelFormat::Integer
        } else {
            LabelFormat::Percent
        }
    }

    pub fn format(&self, value: f32) -> String {
        match self {
            LabelFormat::Integer => format!("{:.0}", value),
            LabelFormat::IntegerWithSuffix(suffix) => format!("{:.0}{}", value, suffix),
            LabelFormat::Percent => format!("{:.0}%", value * 100.0),
            LabelFormat::Decimal { places } => format!("{:.*}", places, value),
        }
    }
}
