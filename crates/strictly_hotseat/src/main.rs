//! Strictly Hotseat entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_hotseat::{Cli, HotseatConfig, init_tracing, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config =
        HotseatConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    if cli.no_history {
        config = config.with_show_history(false);
    }

    init_tracing(&config)?;
    info!(?config, "Configuration resolved");

    run(config, cli.transcript)
}
