//! Token Report Aggregation
//!
//! Merges the canonical trading pair, the mint metadata and the largest
//! holders into one normalized `TokenReport`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::asset::{HolderEntry, MintInfo};
use super::error::ScanError;
use super::market::TradingPair;
use super::risk::{is_whale, share_of_supply, RiskAssessment};

/// Name used when neither source has one
pub const UNKNOWN_NAME: &str = "Unknown";

/// Symbol used when neither source has one
pub const UNKNOWN_SYMBOL: &str = "UNK";

/// Holders kept per report
pub const MAX_HOLDERS: usize = 20;

/// Holders summed for the concentration figure
pub const CONCENTRATION_TOP_N: usize = 5;

const MS_PER_DAY: i64 = 86_400_000;

/// Holder row with its share of supply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolderShare {
    /// 1-based position in source order
    pub rank: usize,
    pub address: String,
    pub ui_amount: f64,
    /// Percentage of supply; `None` when supply is unknown
    pub pct_of_supply: Option<f64>,
    pub is_whale: bool,
}

/// Normalized token report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenReport {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    /// Canonical pair, absent when the token does not trade
    pub pair: Option<TradingPair>,
    /// Mint metadata, absent when the indexing source had nothing
    pub mint_info: Option<MintInfo>,
    pub ui_supply: Option<f64>,
    /// Whole days since the pair was created
    pub age_days: Option<i64>,
    /// Largest holders in source order
    pub holders: Vec<HolderShare>,
    /// Summed share of the first five holders
    pub top5_concentration_pct: Option<f64>,
}

impl TokenReport {
    pub fn is_trading(&self) -> bool {
        self.pair.is_some()
    }

    pub fn whale_count(&self) -> usize {
        self.holders.iter().filter(|h| h.is_whale).count()
    }
}

/// Report plus its risk assessment, as handed to the presentation sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAnalysis {
    pub report: TokenReport,
    pub risk: RiskAssessment,
}

/// Merge the fetched pieces into a report.
///
/// Fails with `NotFound` only when both the pair and the mint info are absent.
/// Holders are kept in source order and capped at `MAX_HOLDERS`.
pub fn aggregate(
    mint: &str,
    pair: Option<TradingPair>,
    mint_info: Option<MintInfo>,
    holders: Vec<HolderEntry>,
    now: DateTime<Utc>,
) -> Result<TokenReport, ScanError> {
    if pair.is_none() && mint_info.is_none() {
        return Err(ScanError::NotFound(mint.to_string()));
    }

    let name = resolve_field(
        mint_info.as_ref().and_then(|m| m.name.as_deref()),
        pair.as_ref().and_then(|p| p.base_token_name.as_deref()),
        UNKNOWN_NAME,
    );
    let symbol = resolve_field(
        mint_info.as_ref().and_then(|m| m.symbol.as_deref()),
        pair.as_ref().and_then(|p| p.base_token_symbol.as_deref()),
        UNKNOWN_SYMBOL,
    );

    let ui_supply = mint_info.as_ref().and_then(MintInfo::ui_supply);
    let age_days = pair
        .as_ref()
        .and_then(|p| p.pair_created_at_ms)
        .map(|created| age_in_days(created, now));

    let holders: Vec<HolderShare> = holders
        .into_iter()
        .take(MAX_HOLDERS)
        .enumerate()
        .map(|(i, h)| HolderShare {
            rank: i + 1,
            pct_of_supply: share_of_supply(h.ui_amount, ui_supply),
            is_whale: is_whale(h.ui_amount, ui_supply),
            address: h.address,
            ui_amount: h.ui_amount,
        })
        .collect();

    let top5_concentration_pct = if holders.is_empty() {
        None
    } else {
        holders
            .iter()
            .take(CONCENTRATION_TOP_N)
            .map(|h| h.pct_of_supply)
            .sum::<Option<f64>>()
    };

    Ok(TokenReport {
        mint: mint.to_string(),
        name,
        symbol,
        pair,
        mint_info,
        ui_supply,
        age_days,
        holders,
        top5_concentration_pct,
    })
}

/// floor((now - created) / 1 day)
pub fn age_in_days(created_at_ms: i64, now: DateTime<Utc>) -> i64 {
    (now.timestamp_millis() - created_at_ms).div_euclid(MS_PER_DAY)
}

fn resolve_field(primary: Option<&str>, fallback: Option<&str>, sentinel: &str) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or(fallback.filter(|s| !s.is_empty()))
        .unwrap_or(sentinel)
        .to_string()
}
