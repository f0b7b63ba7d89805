//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `domain_resolver` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All request handling is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_resolver::initialization::{init_crypto_provider, init_logger_with};
use domain_resolver::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    if let Err(e) = run_server(config).await {
        eprintln!("domain_resolver error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
