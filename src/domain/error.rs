//! Domain error types

use thiserror::Error;

/// Error raised while building `RecordingOptions` from caller input.
///
/// Every variant names the offending field using its payload key
/// (`extension`, `audioSource`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field '{field}'")]
    Missing { field: &'static str },

    #[error("Field '{field}' must not be blank, got \"{value}\"")]
    Empty { field: &'static str, value: String },

    #[error("Invalid value for '{field}': \"{value}\". Valid values are: {expected}")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("Invalid value for '{field}': {value}. Must be a positive number")]
    NotPositive { field: &'static str, value: String },

    #[error("Invalid value for '{field}': {value}. Must be a whole number")]
    NotAnInteger { field: &'static str, value: String },

    #[error("Invalid value for '{field}': {value}. Value is too large")]
    OutOfRange { field: &'static str, value: String },

    #[error("Invalid type for '{field}': expected {expected}, got {value}")]
    WrongType {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Payload key of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::Empty { field, .. }
            | Self::UnknownVariant { field, .. }
            | Self::NotPositive { field, .. }
            | Self::NotAnInteger { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::WrongType { field, .. } => field,
        }
    }

    /// The rejected value as the caller supplied it, if there was one
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Missing { .. } => None,
            Self::Empty { value, .. }
            | Self::UnknownVariant { value, .. }
            | Self::NotPositive { value, .. }
            | Self::NotAnInteger { value, .. }
            | Self::OutOfRange { value, .. }
            | Self::WrongType { value, .. } => Some(value),
        }
    }
}

/// Error when an invalid preset name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid preset: \"{input}\". Valid presets are: high_quality, low_quality")]
pub struct InvalidPresetError {
    pub input: String,
}

/// Error when a platform version string cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid platform version: \"{input}\". Expected a positive API level (e.g., 26)")]
pub struct InvalidPlatformVersionError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
