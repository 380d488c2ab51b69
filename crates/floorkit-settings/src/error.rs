//! Error types for the settings crate.

use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A configuration file problem not tied to one value.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl SettingsError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        SettingsError::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors related to the configuration file itself.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Platform is not supported for config directory resolution.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
