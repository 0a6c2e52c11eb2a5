//! Trading Pair Types
//!
//! Normalized view of one DEX pair for a mint, plus the rule that picks the
//! canonical pair out of everything the market-data source returns.

use serde::{Deserialize, Serialize};

/// One trading pair for a mint, with every market field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingPair {
    /// Base token name as listed by the DEX
    pub base_token_name: Option<String>,
    /// Base token symbol as listed by the DEX
    pub base_token_symbol: Option<String>,
    /// Price in USD
    pub price_usd: Option<f64>,
    /// Fully diluted valuation in USD
    pub fully_diluted_valuation: Option<f64>,
    /// Pool liquidity in USD
    pub liquidity_usd: Option<f64>,
    /// 24-hour volume in USD
    pub volume_24h: Option<f64>,
    /// 24-hour price change percentage
    pub price_change_24h: Option<f64>,
    /// Pair creation time (Unix milliseconds)
    pub pair_created_at_ms: Option<i64>,
    /// DEX identifier (e.g. "raydium")
    pub dex_id: Option<String>,
    /// Pool address
    pub pair_address: Option<String>,
}

impl TradingPair {
    /// Liquidity used for ranking; missing counts as zero
    pub fn ranking_liquidity(&self) -> f64 {
        self.liquidity_usd.unwrap_or(0.0)
    }

    /// Whether the 24h change is non-negative (missing change counts as zero)
    pub fn price_up(&self) -> bool {
        self.price_change_24h.unwrap_or(0.0) >= 0.0
    }
}

/// Pick the pair with the greatest USD liquidity.
///
/// Ties keep the earliest pair in source order.
pub fn select_canonical_pair(pairs: Vec<TradingPair>) -> Option<TradingPair> {
    let mut best: Option<TradingPair> = None;
    for pair in pairs {
        let replace = match &best {
            None => true,
            Some(current) => pair.ranking_liquidity() > current.ranking_liquidity(),
        };
        if replace {
            best = Some(pair);
        }
    }
    best
}
