//! Command line interface: prints seat summaries for saved layout files.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use floorkit_builder::{FloorplanBuilder, SavedLayout};
use floorkit_settings::Config;

use crate::report::LayoutSummary;

#[derive(Debug, Parser)]
#[command(
    name = "floorkit",
    about = "Print element and seat summaries for saved floorplan layouts",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")")
)]
pub struct Cli {
    /// Settings file (JSON or TOML). Defaults to the user config directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Saved layout records to summarize.
    #[arg(required = true, value_name = "LAYOUT")]
    pub layouts: Vec<PathBuf>,
}

impl Cli {
    /// Loads the settings named by `--config`, or the default file if present.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => match Config::default_path() {
                Ok(path) => Ok(Config::load_or_default(&path)?),
                Err(_) => Ok(Config::default()),
            },
        }
    }
}

/// Restores each layout into a builder and writes its summary to `out`.
pub fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let mut builder = FloorplanBuilder::with_options(config.builder_options());
    for path in &cli.layouts {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout {}", path.display()))?;
        let layout = SavedLayout::from_json(&json)
            .with_context(|| format!("Invalid layout {}", path.display()))?;

        builder.load_layout(&layout);
        tracing::info!("Summarizing layout '{}'", layout.name);
        write!(out, "{}", LayoutSummary::from_builder(&layout.name, &builder))?;
    }
    Ok(())
}
