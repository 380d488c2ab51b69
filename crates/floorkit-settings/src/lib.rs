//! Floorkit Settings Crate
//!
//! Handles application configuration: builder limits and logging defaults,
//! loaded from JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, LoggingSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
