//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use std::process;

use dns_audit::config::Opt;
use dns_audit::initialization::{init_logger_with, LogSink};
use dns_audit::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments; usage errors exit with clap's code
    let opt = Opt::parse();
    let alert_incomplete = opt.alert_incomplete();
    let config = Config::from(opt);

    init_logger_with(
        config.log_level.clone().into(),
        config.log_format.clone(),
        LogSink::from_path(&config.log_file),
    )
    .context("Failed to initialize logger")?;

    if alert_incomplete {
        warn!("--alert-email requires --smtp-server and --to-email; alerting disabled");
    }

    match run_scan(config).await {
        Ok(summary) => {
            println!(
                "Analysis complete for {} domain(s). See logs: {}",
                summary.domains_requested,
                summary.log_file.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
