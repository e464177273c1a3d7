//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_monitor` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping the run's outcome to the process exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_monitor::initialization::init_logger_with;
use site_monitor::{run_checks, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_checks(config).await {
        Ok(report) => process::exit(report.exit_code()),
        Err(e) => {
            eprintln!("site_monitor error: {:#}", e);
            process::exit(1);
        }
    }
}
