//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `seo_audit` library: parses command-line
//! arguments, initializes the logger, runs the audit, and prints the report
//! JSON to stdout. All core functionality lives in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_audit::app::init_logger;
use seo_audit::{run_audit, AuditError, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logger(config.log_level.clone().into());

    match run_audit(config.clone()).await {
        Ok(report) => {
            let json = if config.pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            }
            .context("Failed to serialize report")?;
            println!("{json}");
            Ok(())
        }
        Err(e @ AuditError::InvalidUrl(_)) => {
            eprintln!("seo_audit error: {e}");
            process::exit(2);
        }
        Err(e) => {
            eprintln!("seo_audit error: {e:#}");
            process::exit(1);
        }
    }
}
