//! Upstream Fetchers
//!
//! Wrap the ports with a bounded wait and turn every failure into absence.
//! Nothing in here returns an error: a failed call is logged at `warn` and the
//! corresponding field of the report simply stays empty.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{select_canonical_pair, Address, HolderEntry, MintInfo, ScanError, TradingPair};
use crate::ports::{ChainDataPort, MarketDataPort, SourceError};

pub const MARKET_SOURCE: &str = "market-data";
pub const CHAIN_SOURCE: &str = "chain-index";

/// Run `fut` with an upper bound on its duration
pub async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(limit)),
    }
}

/// Log a soft failure and fall back to `T::default()`
pub(crate) fn absorb<T: Default>(source: &str, what: &str, result: Result<T, SourceError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            let err = ScanError::upstream(source, format!("{}: {}", what, e));
            tracing::warn!("{}", err);
            T::default()
        }
    }
}

/// Market-data lookups keyed by mint
#[derive(Clone)]
pub struct MarketDataFetcher {
    port: Arc<dyn MarketDataPort>,
    timeout: Duration,
}

impl MarketDataFetcher {
    pub fn new(port: Arc<dyn MarketDataPort>, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    /// The most liquid pair trading `mint`, or `None`
    pub async fn fetch_pair(&self, mint: &Address) -> Option<TradingPair> {
        let pairs = absorb(
            MARKET_SOURCE,
            "token pairs",
            bounded(self.timeout, self.port.token_pairs(mint)).await,
        );
        let pair_count = pairs.len();
        let selected = select_canonical_pair(pairs);
        if let Some(pair) = &selected {
            tracing::debug!(
                "Selected pair {:?} on {:?} out of {} (liquidity ${:.0})",
                pair.pair_address,
                pair.dex_id,
                pair_count,
                pair.ranking_liquidity()
            );
        }
        selected
    }
}

/// Chain-index lookups for a mint
#[derive(Clone)]
pub struct AssetDataFetcher {
    port: Arc<dyn ChainDataPort>,
    timeout: Duration,
    holder_limit: usize,
}

impl AssetDataFetcher {
    pub fn new(port: Arc<dyn ChainDataPort>, timeout: Duration, holder_limit: usize) -> Self {
        Self { port, timeout, holder_limit }
    }

    pub async fn fetch_asset(&self, mint: &Address) -> Option<MintInfo> {
        absorb(CHAIN_SOURCE, "asset", bounded(self.timeout, self.port.asset(mint)).await)
    }

    /// Largest token accounts in source order, at most `holder_limit`
    pub async fn fetch_largest_holders(&self, mint: &Address) -> Vec<HolderEntry> {
        let mut holders = absorb(
            CHAIN_SOURCE,
            "largest holders",
            bounded(self.timeout, self.port.largest_holders(mint)).await,
        );
        holders.truncate(self.holder_limit);
        holders
    }
}
