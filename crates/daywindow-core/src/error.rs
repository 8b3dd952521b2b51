//! Core error types for daywindow-core.
//!
//! This module defines the error hierarchy using thiserror. Configuration
//! problems (including out-of-range anchor times) surface as
//! [`CoreError::InvalidConfiguration`] and are never silently clamped.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for daywindow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected configuration (bad anchor time, unknown key, unreadable file)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// Validation errors for host payloads
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The daily window around `now` falls outside representable instants
    #[error("No daily window can be represented around {now}")]
    OutOfRange { now: chrono::DateTime<chrono::Utc> },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse a configuration value
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Range bounds are inverted or collapsed
    #[error("Invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f64, max: f64 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl CoreError {
    /// Shorthand for an out-of-range or malformed configuration value.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::InvalidConfiguration(ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        })
    }

    /// Whether this error is a rejected configuration.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, CoreError::InvalidConfiguration(_))
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_is_configuration_error() {
        let err = CoreError::invalid_value("anchor.hour", "24 is outside 0..=23");
        assert!(err.is_invalid_configuration());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Invalid configuration value for 'anchor.hour': 24 is outside 0..=23"
        );
    }

    #[test]
    fn validation_error_is_not_configuration_error() {
        let err: CoreError = ValidationError::InvalidRange { min: 10.0, max: 0.0 }.into();
        assert!(!err.is_invalid_configuration());
    }
}
