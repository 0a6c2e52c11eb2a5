//! Wallet Summary
//!
//! Classifies a wallet's owned assets into fungible tokens and collectibles
//! and builds the `WalletReport` handed to the presentation sink.

use serde::{Deserialize, Serialize};

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Interface tags that mark a fungible asset
pub const FUNGIBLE_INTERFACES: [&str; 2] = ["FungibleToken", "FungibleAsset"];

/// Holdings listed per report
pub const TOP_HOLDINGS: usize = 5;

/// Transactions listed per report
pub const RECENT_TRANSACTIONS: usize = 10;

/// Asset as returned by the owned-assets query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedAsset {
    /// Asset id (mint address)
    pub id: String,
    /// Interface tag from the indexing source
    pub interface: String,
    /// Metadata name
    pub name: Option<String>,
    /// Raw token balance (fungible only)
    pub raw_balance: Option<u64>,
    /// Decimals (fungible only)
    pub decimals: Option<u8>,
}

impl OwnedAsset {
    pub fn is_fungible(&self) -> bool {
        FUNGIBLE_INTERFACES.contains(&self.interface.as_str())
    }

    /// Balance adjusted for decimals; missing values count as zero
    pub fn ui_balance(&self) -> f64 {
        let raw = self.raw_balance.unwrap_or(0) as f64;
        raw / 10f64.powi(self.decimals.unwrap_or(0) as i32)
    }
}

/// Signature history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub signature: String,
    /// False when the transaction carried an error
    pub succeeded: bool,
    /// Block time (Unix seconds), when known
    pub block_time: Option<i64>,
}

/// One fungible holding with a positive balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletHolding {
    pub name: String,
    pub ui_balance: f64,
}

/// Wallet summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletReport {
    pub address: String,
    pub lamports: u64,
    pub sol_balance: f64,
    pub token_count: usize,
    pub nft_count: usize,
    /// Largest fungible holdings, descending
    pub top_holdings: Vec<WalletHolding>,
    pub recent_transactions: Vec<SignatureEntry>,
}

/// Counts and holdings derived from the owned-asset list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldingsSummary {
    pub token_count: usize,
    pub nft_count: usize,
    /// Positive holdings in source order
    pub holdings: Vec<WalletHolding>,
}

/// Walk the owned assets once, counting fungibles and collectibles
pub fn classify_assets(assets: &[OwnedAsset]) -> HoldingsSummary {
    let mut summary = HoldingsSummary::default();
    for asset in assets {
        if !asset.is_fungible() {
            summary.nft_count += 1;
            continue;
        }
        summary.token_count += 1;
        let ui_balance = asset.ui_balance();
        if ui_balance > 0.0 {
            summary.holdings.push(WalletHolding {
                name: asset.name.clone().unwrap_or_else(|| "Unknown".to_string()),
                ui_balance,
            });
        }
    }
    summary
}

/// Stable descending sort by balance, then keep the first `limit`
pub fn top_holdings(mut holdings: Vec<WalletHolding>, limit: usize) -> Vec<WalletHolding> {
    holdings.sort_by(|a, b| b.ui_balance.total_cmp(&a.ui_balance));
    holdings.truncate(limit);
    holdings
}

/// Build the report from the three query results
pub fn summarize_wallet(
    address: &str,
    lamports: u64,
    assets: &[OwnedAsset],
    mut signatures: Vec<SignatureEntry>,
    holdings_limit: usize,
    transactions_limit: usize,
) -> WalletReport {
    let summary = classify_assets(assets);
    signatures.truncate(transactions_limit);

    WalletReport {
        address: address.to_string(),
        lamports,
        sol_balance: lamports as f64 / LAMPORTS_PER_SOL,
        token_count: summary.token_count,
        nft_count: summary.nft_count,
        top_holdings: top_holdings(summary.holdings, holdings_limit),
        recent_transactions: signatures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fungible(name: &str, raw_balance: u64, decimals: u8) -> OwnedAsset {
        OwnedAsset {
            id: format!("{name}Mint"),
            interface: "FungibleToken".to_string(),
            name: Some(name.to_string()),
            raw_balance: Some(raw_balance),
            decimals: Some(decimals),
        }
    }

    fn nft(name: &str) -> OwnedAsset {
        OwnedAsset {
            id: format!("{name}Mint"),
            interface: "V1_NFT".to_string(),
            name: Some(name.to_string()),
            raw_balance: None,
            decimals: None,
        }
    }

    fn holding(name: &str, ui_balance: f64) -> WalletHolding {
        WalletHolding { name: name.to_string(), ui_balance }
    }

    #[test]
    fn test_classify_mixed_assets() {
        let assets = vec![
            fungible("Ten", 10, 0),
            nft("Ape"),
            fungible("Zero", 0, 0),
            nft("Punk"),
            fungible("Five", 5, 0),
        ];
        let summary = classify_assets(&assets);
        assert_eq!(summary.token_count, 3);
        assert_eq!(summary.nft_count, 2);
        assert_eq!(summary.holdings, vec![holding("Ten", 10.0), holding("Five", 5.0)]);
    }

    #[test]
    fn test_fungible_asset_interface() {
        let mut asset = fungible("Wrapped", 1_500_000, 6);
        asset.interface = "FungibleAsset".to_string();
        assert!(asset.is_fungible());
        assert_eq!(asset.ui_balance(), 1.5);
    }

    #[test]
    fn test_missing_balance_counts_as_zero() {
        let mut asset = fungible("Empty", 0, 0);
        asset.raw_balance = None;
        asset.decimals = None;
        let summary = classify_assets(&[asset]);
        assert_eq!(summary.token_count, 1);
        assert!(summary.holdings.is_empty());
    }

    #[test]
    fn test_unnamed_holding() {
        let mut asset = fungible("x", 3, 0);
        asset.name = None;
        let summary = classify_assets(&[asset]);
        assert_eq!(summary.holdings[0].name, "Unknown");
    }

    #[test]
    fn test_top_holdings_sorted_and_capped() {
        let holdings = vec![
            holding("a", 1.0),
            holding("b", 9.0),
            holding("c", 3.0),
            holding("d", 7.0),
            holding("e", 5.0),
            holding("f", 8.0),
        ];
        let top = top_holdings(holdings, TOP_HOLDINGS);
        let names: Vec<&str> = top.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["b", "f", "d", "e", "c"]);
    }

    #[test]
    fn test_top_holdings_stable_on_ties() {
        let holdings = vec![holding("first", 2.0), holding("big", 4.0), holding("second", 2.0)];
        let top = top_holdings(holdings, TOP_HOLDINGS);
        let names: Vec<&str> = top.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["big", "first", "second"]);
    }

    #[test]
    fn test_summarize_wallet() {
        let signatures: Vec<SignatureEntry> = (0..12)
            .map(|i| SignatureEntry { signature: format!("sig{i}"), succeeded: i % 3 != 0, block_time: None })
            .collect();
        let report = summarize_wallet(
            "Wallet1111111111111111111111111111111",
            2_500_000_000,
            &[fungible("Ten", 10, 0), nft("Ape")],
            signatures,
            TOP_HOLDINGS,
            RECENT_TRANSACTIONS,
        );
        assert_eq!(report.sol_balance, 2.5);
        assert_eq!(report.token_count, 1);
        assert_eq!(report.nft_count, 1);
        assert_eq!(report.recent_transactions.len(), RECENT_TRANSACTIONS);
        assert!(!report.recent_transactions[0].succeeded);
        assert!(report.recent_transactions[1].succeeded);
    }
}
