//! Configuration file handling for Floorkit
//!
//! Configuration is organized into sections:
//! - Builder limits (history depth, zoom bounds, grid defaults)
//! - Logging defaults
//!
//! Files are JSON or TOML, chosen by extension, and validated on both load
//! and save.

use floorkit_builder::BuilderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "floorkit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Logging defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Floorplan builder limits
    pub builder: BuilderOptions,
    /// Logging defaults
    pub logging: LoggingSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location in the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform("no user config directory".to_string())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let b = &self.builder;

        if b.max_history == 0 {
            return Err(SettingsError::invalid("max_history", "must be at least 1"));
        }

        if !(b.zoom_step > 0.0 && b.zoom_step < 1.0) {
            return Err(SettingsError::invalid(
                "zoom_step",
                "must be between 0 and 1 (exclusive)",
            ));
        }

        if !(b.min_zoom > 0.0 && b.min_zoom.is_finite()) {
            return Err(SettingsError::invalid("min_zoom", "must be > 0"));
        }

        if !(b.max_zoom > b.min_zoom && b.max_zoom.is_finite()) {
            return Err(SettingsError::invalid(
                "max_zoom",
                "must be greater than min_zoom",
            ));
        }

        if !(b.min_zoom <= 1.0 && 1.0 <= b.max_zoom) {
            return Err(SettingsError::invalid(
                "min_zoom",
                "zoom range must include 1.0",
            ));
        }

        if !(b.grid_size >= 1.0 && b.grid_size.is_finite()) {
            return Err(SettingsError::invalid("grid_size", "must be at least 1"));
        }

        if !b.duplicate_offset.is_finite() {
            return Err(SettingsError::invalid(
                "duplicate_offset",
                "must be a finite number",
            ));
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(SettingsError::invalid(
                "logging.level",
                format!("unknown level '{}'", self.logging.level),
            ));
        }

        Ok(())
    }

    /// Options for a new builder session.
    pub fn builder_options(&self) -> BuilderOptions {
        self.builder.clone()
    }
}
