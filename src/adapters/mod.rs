//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - DexScreener: market-data REST client
//! - Helius: chain-indexing JSON-RPC client
//! - CLI: Command-line interface and report printer

pub mod cli;
pub mod dexscreener;
pub mod helius;

pub use cli::CliApp;
pub use dexscreener::DexScreenerClient;
pub use helius::HeliusClient;
