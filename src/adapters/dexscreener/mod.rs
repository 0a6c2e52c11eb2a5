//! DexScreener Adapter
//!
//! Market-data source: every DEX pair trading a given mint, with price,
//! liquidity, volume, 24h change and pair creation time.
//!
//! ```rust,ignore
//! use sol_scanner::adapters::dexscreener::{DexScreenerClient, DexScreenerConfig};
//! use sol_scanner::ports::MarketDataPort;
//!
//! let client = DexScreenerClient::with_config(DexScreenerConfig::default())?;
//! let pairs = client.token_pairs(&mint).await?;
//! ```

mod client;
mod types;

pub use client::{DexScreenerClient, DexScreenerConfig, DexScreenerError, DEXSCREENER_API_URL};
pub use types::{DexPair, TokenPairsResponse};
