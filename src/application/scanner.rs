//! Token Scanner
//!
//! The token lookup pipeline:
//! 1. Validate the address
//! 2. Fan out: pair, asset and largest holders, concurrently
//! 3. Fan in: aggregate into a `TokenReport`
//! 4. Score the mint's authority and metadata flags

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::fetchers::{AssetDataFetcher, MarketDataFetcher};
use crate::domain::report::MAX_HOLDERS;
use crate::domain::wallet::{RECENT_TRANSACTIONS, TOP_HOLDINGS};
use crate::domain::{aggregate, Address, RiskScorer, ScanError, TokenAnalysis};
use crate::ports::{ChainDataPort, MarketDataPort};

/// Limits shared by the token and wallet pipelines
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    /// Upper bound on each external call
    pub request_timeout: Duration,
    pub holder_limit: usize,
    pub top_holdings: usize,
    pub recent_transactions: usize,
    /// Page size for `getAssetsByOwner`
    pub assets_page_limit: u32,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            holder_limit: MAX_HOLDERS,
            top_holdings: TOP_HOLDINGS,
            recent_transactions: RECENT_TRANSACTIONS,
            assets_page_limit: 100,
        }
    }
}

pub struct Scanner {
    market: MarketDataFetcher,
    assets: AssetDataFetcher,
}

impl Scanner {
    pub fn new(
        market_port: Arc<dyn MarketDataPort>,
        chain_port: Arc<dyn ChainDataPort>,
        settings: &ScanSettings,
    ) -> Self {
        Self {
            market: MarketDataFetcher::new(market_port, settings.request_timeout),
            assets: AssetDataFetcher::new(chain_port, settings.request_timeout, settings.holder_limit),
        }
    }

    /// Full token lookup against the current time
    pub async fn scan_token(&self, raw: &str) -> Result<TokenAnalysis, ScanError> {
        self.scan_token_at(raw, Utc::now()).await
    }

    /// Full token lookup; `now` drives the pair age
    pub async fn scan_token_at(&self, raw: &str, now: DateTime<Utc>) -> Result<TokenAnalysis, ScanError> {
        let mint = Address::parse(raw)?;
        tracing::info!("Scanning token {}", mint.short());

        let (pair, mint_info, holders) = tokio::join!(
            self.market.fetch_pair(&mint),
            self.assets.fetch_asset(&mint),
            self.assets.fetch_largest_holders(&mint),
        );
        tracing::debug!(
            "Fetched pair={} asset={} holders={}",
            pair.is_some(),
            mint_info.is_some(),
            holders.len()
        );

        let report = aggregate(mint.as_str(), pair, mint_info, holders, now)?;
        let risk = RiskScorer::assess(report.mint_info.as_ref());

        tracing::info!(
            "{} ({}): {} score={:?} whales={}",
            report.name,
            report.symbol,
            risk.verdict.label(),
            risk.score,
            report.whale_count()
        );
        Ok(TokenAnalysis { report, risk })
    }
}
