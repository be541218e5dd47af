//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `header_scanner` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Relay server mode
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use header_scanner::fetch::DirectTransport;
use header_scanner::initialization::{init_client, init_logger_with};
use header_scanner::output::render;
use header_scanner::relay::{start_relay_server, RelayState};
use header_scanner::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Some(port) = config.serve_relay {
        let timeout = config.probe_timeout();
        let client = init_client(&config.user_agent, timeout)
            .context("Failed to initialize HTTP client")?;
        let state = RelayState::new(DirectTransport::new(client, timeout));
        return start_relay_server(port, state).await;
    }

    let output = config.output;
    let show_log = config.show_log;

    match run_scan(config).await {
        Ok(outcome) => {
            let log = show_log.then_some(outcome.log.as_slice());
            let rendered =
                render(&outcome.report, output, log).context("Failed to render report")?;
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            eprintln!("header_scanner error: {:#}", anyhow::Error::new(e));
            process::exit(1);
        }
    }
}
