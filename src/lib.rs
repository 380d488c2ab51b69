//! # Floorkit
//!
//! Restaurant floorplan builder state: place tables, seating, bar and service
//! furniture on a grid canvas, arrange them, and undo or redo every edit.
//!
//! ## Architecture
//!
//! Floorkit is organized as a workspace with multiple crates:
//!
//! 1. **floorkit-core** - Error type and identifier generation
//! 2. **floorkit-builder** - Element model, templates, canvas view, history, layouts
//! 3. **floorkit-settings** - JSON/TOML configuration with validation
//! 4. **floorkit** - Logging setup, layout reports and the command line entry point

pub mod cli;
pub mod report;

pub use floorkit_builder as builder;

pub use floorkit_builder::{
    BuilderOptions, CanvasState, ElementCategory, ElementShape, ElementTemplate, ElementUpdate,
    FloorplanBuilder, PlacedElement, SavedLayout, TemplateCatalog,
};
pub use floorkit_core::{Error, Result};
pub use floorkit_settings::{Config, SettingsError};
pub use report::LayoutSummary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, falling back to `default_level`
/// - Pretty formatted output on stderr, leaving stdout for reports
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
