//! CLI Command Handlers
//!
//! Implementation of all CLI commands for the sol-scanner tool.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use super::output;
use crate::adapters::dexscreener::{DexScreenerClient, DexScreenerConfig};
use crate::adapters::helius::{HeliusClient, HeliusConfig};
use crate::application::{ScanSettings, Scanner, WalletSummarizer};
use crate::config::Config;

/// sol-scanner - Solana token and wallet risk scanner
#[derive(Parser, Debug)]
#[command(
    name = "sol-scanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Solana token and wallet risk scanner",
    long_about = "sol-scanner looks up a Solana mint or wallet, combining DexScreener market data \
                  with Helius on-chain data into a report and a deterministic safety score."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a token mint: market data, holders and safety score
    Token(TokenCmd),

    /// Summarize a wallet: SOL balance, holdings and recent transactions
    Wallet(WalletCmd),

    /// Print the effective configuration (API key redacted)
    Config,
}

#[derive(Parser, Debug)]
pub struct TokenCmd {
    /// Token mint address
    #[arg(value_name = "MINT")]
    pub mint: String,
}

#[derive(Parser, Debug)]
pub struct WalletCmd {
    /// Wallet address
    #[arg(value_name = "ADDRESS")]
    pub address: String,
}

/// Execute a parsed command against a loaded config
pub async fn execute(command: Command, format: OutputFormat, config: &Config) -> Result<()> {
    match command {
        Command::Token(cmd) => token_command(cmd, format, config).await,
        Command::Wallet(cmd) => wallet_command(cmd, format, config).await,
        Command::Config => config_command(config),
    }
}

async fn token_command(cmd: TokenCmd, format: OutputFormat, config: &Config) -> Result<()> {
    let market = DexScreenerClient::with_config(DexScreenerConfig::from(config))
        .context("Failed to create DexScreener client")?;
    let chain = HeliusClient::with_config(HeliusConfig::from(config))
        .context("Failed to create Helius client")?;
    let scanner = Scanner::new(Arc::new(market), Arc::new(chain), &ScanSettings::from(config));

    let analysis = scanner.scan_token(cmd.mint.trim()).await?;

    match format {
        OutputFormat::Text => print!("{}", output::render_token_text(&analysis)),
        OutputFormat::Json => {
            let value = output::token_json(&analysis)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

async fn wallet_command(cmd: WalletCmd, format: OutputFormat, config: &Config) -> Result<()> {
    let chain = HeliusClient::with_config(HeliusConfig::from(config))
        .context("Failed to create Helius client")?;
    let summarizer = WalletSummarizer::new(Arc::new(chain), &ScanSettings::from(config));

    let report = summarizer.summarize(cmd.address.trim()).await?;

    match format {
        OutputFormat::Text => print!("{}", output::render_wallet_text(&report)),
        OutputFormat::Json => {
            let value = output::wallet_json(&report)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn config_command(config: &Config) -> Result<()> {
    let shown = config
        .redacted_toml()
        .context("Failed to render configuration")?;
    print!("{}", shown);
    Ok(())
}
