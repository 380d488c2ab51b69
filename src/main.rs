//! Command line entry point: prints seat summaries for saved layout files.
//!
//! ```text
//! floorkit [--config <file>] <layout.json>...
//! ```

use clap::Parser;
use floorkit::cli::{run, Cli};
use floorkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_logging(&config.logging.level)?;

    run(&cli, &config, &mut std::io::stdout().lock())
}
