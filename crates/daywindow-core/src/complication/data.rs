use serde::{Deserialize, Serialize};

use super::text::ComplicationText;
use super::types::ComplicationType;
use crate::error::ValidationError;

/// A value shown against a `[min, max]` range (progress arc, gauge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangedValueData {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub content_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<ComplicationText>,
}

impl RangedValueData {
    /// Build a ranged value, rejecting inverted ranges and out-of-range values.
    pub fn new(
        value: f64,
        min: f64,
        max: f64,
        content_description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if !(min < max) {
            return Err(ValidationError::InvalidRange { min, max });
        }
        if !(min..=max).contains(&value) {
            return Err(ValidationError::InvalidValue {
                field: "value".into(),
                message: format!("{value} is outside [{min}, {max}]"),
            });
        }
        Ok(Self {
            value,
            min,
            max,
            content_description: content_description.into(),
            text: None,
        })
    }

    pub fn with_text(mut self, text: ComplicationText) -> Self {
        self.text = Some(text);
        self
    }
}

/// Payload handed back to the host renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComplicationData {
    RangedValue(RangedValueData),
}

impl ComplicationData {
    pub fn complication_type(&self) -> ComplicationType {
        match self {
            ComplicationData::RangedValue(_) => ComplicationType::RangedValue,
        }
    }

    pub fn as_ranged_value(&self) -> Option<&RangedValueData> {
        match self {
            ComplicationData::RangedValue(data) => Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            RangedValueData::new(5.0, 10.0, 0.0, "x"),
            Err(ValidationError::InvalidRange { .. })
        ));
        assert!(RangedValueData::new(0.0, 0.0, 0.0, "x").is_err());
    }

    #[test]
    fn rejects_value_outside_range() {
        assert!(matches!(
            RangedValueData::new(11.0, 0.0, 10.0, "x"),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(RangedValueData::new(0.0, 0.0, 10.0, "x").is_ok());
        assert!(RangedValueData::new(10.0, 0.0, 10.0, "x").is_ok());
    }

    #[test]
    fn serializes_with_type_tag() {
        let data = ComplicationData::RangedValue(RangedValueData::new(4.0, 0.0, 10.0, "n").unwrap());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["type"], "ranged_value");
        assert_eq!(json["value"], 4.0);
        assert!(json.get("text").is_none());
    }
}
