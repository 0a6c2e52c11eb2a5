//! DexScreener Client
//!
//! Fetches every pair trading a mint from DexScreener's public token endpoint.
//! Single attempt per call; failures are reported to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::types::TokenPairsResponse;
use crate::domain::{Address, TradingPair};
use crate::ports::{MarketDataPort, SourceError};

/// Default DexScreener API base URL
pub const DEXSCREENER_API_URL: &str = "https://api.dexscreener.com";

#[derive(Debug, Error)]
pub enum DexScreenerError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Configuration for the DexScreenerClient
#[derive(Debug, Clone)]
pub struct DexScreenerConfig {
    /// API base URL (no trailing slash)
    pub api_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            api_url: DEXSCREENER_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    config: DexScreenerConfig,
    http: Client,
}

impl DexScreenerClient {
    pub fn with_config(config: DexScreenerConfig) -> Result<Self, DexScreenerError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Endpoint for one mint
    pub fn token_url(&self, mint: &str) -> String {
        format!("{}/latest/dex/tokens/{}", self.config.api_url.trim_end_matches('/'), mint)
    }

    /// Map a decoded response into domain pairs, keeping source order
    pub fn parse_pairs(response: TokenPairsResponse) -> Vec<TradingPair> {
        response
            .pairs
            .unwrap_or_default()
            .into_iter()
            .map(TradingPair::from)
            .collect()
    }
}

#[async_trait]
impl MarketDataPort for DexScreenerClient {
    async fn token_pairs(&self, mint: &Address) -> Result<Vec<TradingPair>, SourceError> {
        let url = self.token_url(mint.as_str());
        tracing::debug!("DexScreener GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body: TokenPairsResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("DexScreener response: {}", e)))?;

        let pairs = Self::parse_pairs(body);
        tracing::debug!("DexScreener returned {} pairs for {}", pairs.len(), mint);
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = DexScreenerConfig::default();
        assert_eq!(config.api_url, "https://api.dexscreener.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_token_url() {
        let client = DexScreenerClient::with_config(DexScreenerConfig {
            api_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.token_url("Mint1"), "http://localhost:9000/latest/dex/tokens/Mint1");
    }

    #[test]
    fn test_parse_pairs_keeps_order() {
        let body: TokenPairsResponse = serde_json::from_str(
            r#"{"pairs": [{"pairAddress": "A"}, {"pairAddress": "B"}, {"pairAddress": "C"}]}"#,
        )
        .unwrap();
        let pairs = DexScreenerClient::parse_pairs(body);
        let order: Vec<_> = pairs.iter().map(|p| p.pair_address.as_deref().unwrap()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_pairs_null() {
        let body: TokenPairsResponse = serde_json::from_str(r#"{"pairs": null}"#).unwrap();
        assert!(DexScreenerClient::parse_pairs(body).is_empty());
    }
}
