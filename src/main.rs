//! sol-scanner - Solana token and wallet risk scanner
//!
//! Looks up a mint or wallet and prints a report with a deterministic safety score.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use sol_scanner::adapters::cli::{self, CliApp};
use sol_scanner::config::{load_config, Config};

#[tokio::main]
async fn main() {
    // Load .env file if it exists (HELIUS_API_KEY goes here, not in the config file)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();

    if let Err(e) = run(app).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(app: CliApp) -> Result<()> {
    let config = match &app.config {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).to_string();
            load_config(Path::new(&expanded))
                .with_context(|| format!("Failed to load configuration from {}", expanded))?
        }
        None => Config::default(),
    };

    init_logging(app.verbose, app.debug, &config.logging.level)?;
    tracing::debug!("Effective scan settings: {:?}", config.scan);

    cli::execute(app.command, app.format, &config).await
}

/// Logs go to stderr so JSON on stdout stays clean. RUST_LOG wins when set.
fn init_logging(verbose: bool, debug: bool, configured_level: &str) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    Ok(())
}
