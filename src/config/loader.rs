//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config/default.toml.
//! Every field has a default, so a partial file (or no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::dexscreener::{DexScreenerConfig, DEXSCREENER_API_URL};
use crate::adapters::helius::{HeliusConfig, HELIUS_RPC_URL};
use crate::application::ScanSettings;
use crate::domain::report::MAX_HOLDERS;
use crate::domain::wallet::{RECENT_TRANSACTIONS, TOP_HOLDINGS};

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub market_data: MarketDataSection,
    pub helius: HeliusSection,
    pub scan: ScanSection,
    pub logging: LoggingSection,
}

/// DexScreener section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataSection {
    /// DexScreener API base URL
    pub api_url: String,
}

impl Default for MarketDataSection {
    fn default() -> Self {
        Self { api_url: DEXSCREENER_API_URL.to_string() }
    }
}

impl MarketDataSection {
    /// Get API URL with environment variable override
    /// Checks DEXSCREENER_API_URL env var first, falls back to config value
    pub fn get_api_url(&self) -> String {
        std::env::var("DEXSCREENER_API_URL").unwrap_or_else(|_| self.api_url.clone())
    }
}

/// Helius RPC section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeliusSection {
    /// RPC endpoint; may point at a proxy that adds the key itself
    pub rpc_url: String,
    /// Optional API key (prefer HELIUS_API_KEY in .env)
    pub api_key: Option<String>,
}

impl Default for HeliusSection {
    fn default() -> Self {
        Self {
            rpc_url: HELIUS_RPC_URL.to_string(),
            api_key: None,
        }
    }
}

impl HeliusSection {
    /// Get RPC URL with environment variable override
    /// Checks HELIUS_RPC_URL env var first, falls back to config value
    pub fn get_rpc_url(&self) -> String {
        std::env::var("HELIUS_RPC_URL").unwrap_or_else(|_| self.rpc_url.clone())
    }

    /// Get API key with environment variable fallback
    /// Checks HELIUS_API_KEY env var if config value is empty/None
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var("HELIUS_API_KEY").ok().filter(|k| !k.is_empty())
    }
}

/// Scan limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Upper bound on each external call, in milliseconds
    pub request_timeout_ms: u64,
    /// Largest holders kept per token
    pub holder_limit: usize,
    /// Holdings shown per wallet
    pub top_holdings: usize,
    /// Signatures fetched per wallet
    pub recent_transactions: usize,
    /// Page size for getAssetsByOwner
    pub assets_page_limit: u32,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            request_timeout_ms: 10_000,
            holder_limit: MAX_HOLDERS,
            top_holdings: TOP_HOLDINGS,
            recent_transactions: RECENT_TRANSACTIONS,
            assets_page_limit: 100,
        }
    }
}

impl ScanSection {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Logging configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.market_data.api_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "market_data.api_url cannot be empty".to_string(),
            ));
        }
        if self.helius.rpc_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "helius.rpc_url cannot be empty".to_string(),
            ));
        }

        if self.scan.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_ms must be > 0".to_string(),
            ));
        }
        let limits = [
            ("holder_limit", self.scan.holder_limit),
            ("top_holdings", self.scan.top_holdings),
            ("recent_transactions", self.scan.recent_transactions),
            ("assets_page_limit", self.scan.assets_page_limit as usize),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!("{} must be > 0", name)));
            }
        }
        if self.scan.holder_limit > MAX_HOLDERS {
            return Err(ConfigError::ValidationError(format!(
                "scan.holder_limit must be <= {}, got {}",
                MAX_HOLDERS, self.scan.holder_limit
            )));
        }

        if !["trace", "debug", "info", "warn", "error"].contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of trace/debug/info/warn/error, got {}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Effective configuration as TOML, API key masked
    pub fn redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        shown.helius.api_key = self.helius.get_api_key().map(|_| "********".to_string());
        shown.helius.rpc_url = self.helius.get_rpc_url();
        shown.market_data.api_url = self.market_data.get_api_url();
        toml::to_string_pretty(&shown)
    }
}

impl From<&Config> for ScanSettings {
    fn from(config: &Config) -> Self {
        ScanSettings {
            request_timeout: config.scan.request_timeout(),
            holder_limit: config.scan.holder_limit,
            top_holdings: config.scan.top_holdings,
            recent_transactions: config.scan.recent_transactions,
            assets_page_limit: config.scan.assets_page_limit,
        }
    }
}

impl From<&Config> for DexScreenerConfig {
    fn from(config: &Config) -> Self {
        DexScreenerConfig {
            api_url: config.market_data.get_api_url(),
            timeout: config.scan.request_timeout(),
        }
    }
}

impl From<&Config> for HeliusConfig {
    fn from(config: &Config) -> Self {
        HeliusConfig {
            rpc_url: config.helius.get_rpc_url(),
            api_key: config.helius.get_api_key(),
            timeout: config.scan.request_timeout(),
        }
    }
}
