//! DexScreener API Types
//!
//! Wire format of `GET /latest/dex/tokens/{mint}`. Every field is optional;
//! DexScreener omits fields for thin or brand-new pools.

use serde::Deserialize;

use crate::domain::TradingPair;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPairsResponse {
    /// `null` when the mint has no pairs
    #[serde(default)]
    pub pairs: Option<Vec<DexPair>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPair {
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub dex_id: Option<String>,
    #[serde(default)]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub base_token: Option<DexToken>,
    /// Decimal string, e.g. "0.8312"
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub fdv: Option<f64>,
    #[serde(default)]
    pub liquidity: Option<DexLiquidity>,
    #[serde(default)]
    pub volume: Option<DexWindowed>,
    #[serde(default)]
    pub price_change: Option<DexWindowed>,
    /// Unix milliseconds
    #[serde(default)]
    pub pair_created_at: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DexToken {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DexLiquidity {
    #[serde(default)]
    pub usd: Option<f64>,
}

/// Per-window figures; only the 24h window is used
#[derive(Debug, Clone, Deserialize)]
pub struct DexWindowed {
    #[serde(default)]
    pub h24: Option<f64>,
}

impl From<DexPair> for TradingPair {
    fn from(pair: DexPair) -> Self {
        let (base_token_name, base_token_symbol) = match pair.base_token {
            Some(token) => (token.name, token.symbol),
            None => (None, None),
        };

        TradingPair {
            base_token_name,
            base_token_symbol,
            price_usd: pair.price_usd.as_deref().and_then(|p| p.parse::<f64>().ok()),
            fully_diluted_valuation: pair.fdv,
            liquidity_usd: pair.liquidity.and_then(|l| l.usd),
            volume_24h: pair.volume.and_then(|v| v.h24),
            price_change_24h: pair.price_change.and_then(|c| c.h24),
            pair_created_at_ms: pair.pair_created_at,
            dex_id: pair.dex_id,
            pair_address: pair.pair_address,
        }
    }
}
