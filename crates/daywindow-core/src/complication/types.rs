use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Complication kinds a watch face may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplicationType {
    ShortText,
    LongText,
    RangedValue,
    MonochromaticImage,
    SmallImage,
    PhotoImage,
    NoData,
    Empty,
    NotConfigured,
}

impl ComplicationType {
    pub const ALL: [ComplicationType; 9] = [
        ComplicationType::ShortText,
        ComplicationType::LongText,
        ComplicationType::RangedValue,
        ComplicationType::MonochromaticImage,
        ComplicationType::SmallImage,
        ComplicationType::PhotoImage,
        ComplicationType::NoData,
        ComplicationType::Empty,
        ComplicationType::NotConfigured,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplicationType::ShortText => "short_text",
            ComplicationType::LongText => "long_text",
            ComplicationType::RangedValue => "ranged_value",
            ComplicationType::MonochromaticImage => "monochromatic_image",
            ComplicationType::SmallImage => "small_image",
            ComplicationType::PhotoImage => "photo_image",
            ComplicationType::NoData => "no_data",
            ComplicationType::Empty => "empty",
            ComplicationType::NotConfigured => "not_configured",
        }
    }
}

impl fmt::Display for ComplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplicationType {
    type Err = ValidationError;

    /// Accepts `ranged_value`, `ranged-value` and `RANGED_VALUE` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "complication_type".into(),
                message: format!("unknown complication type '{s}'"),
            })
    }
}

/// A host request for fresh data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplicationRequest {
    pub instance_id: i32,
    pub complication_type: ComplicationType,
}

impl ComplicationRequest {
    pub fn new(instance_id: i32, complication_type: ComplicationType) -> Self {
        Self {
            instance_id,
            complication_type,
        }
    }
}
