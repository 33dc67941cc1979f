//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use page_audit::config::{Command, Opt};
use page_audit::initialization::init_logger_with;
use page_audit::{server, Auditor, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let auditor = Auditor::new(&config).context("Failed to initialize HTTP client")?;

    match opt.command {
        Command::Audit { url, compact } => match auditor.audit(&url).await {
            Ok(report) => {
                let json = if compact {
                    serde_json::to_string(&report)
                } else {
                    serde_json::to_string_pretty(&report)
                }
                .context("Failed to serialize report")?;
                println!("{}", json);
                Ok(())
            }
            Err(e) => {
                eprintln!("page_audit error: {:#}", e);
                process::exit(1);
            }
        },
        Command::Serve { bind, port } => server::serve(&bind, port, Arc::new(auditor))
            .await
            .context("Audit server stopped"),
    }
}
