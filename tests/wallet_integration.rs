//! Wallet Summary Integration Tests
//!
//! Exercise WalletSummarizer against a mockall-generated ChainDataPort so the
//! exact query arguments and call counts are asserted.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;

use sol_scanner::application::{ScanSettings, WalletSummarizer};
use sol_scanner::domain::{
    Address, HolderEntry, MintInfo, OwnedAsset, ScanError, SignatureEntry,
};
use sol_scanner::ports::{ChainDataPort, SourceError};

const WALLET: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

mock! {
    pub Chain {}

    #[async_trait]
    impl ChainDataPort for Chain {
        async fn asset(&self, mint: &Address) -> Result<Option<MintInfo>, SourceError>;
        async fn largest_holders(&self, mint: &Address) -> Result<Vec<HolderEntry>, SourceError>;
        async fn balance(&self, address: &Address) -> Result<u64, SourceError>;
        async fn assets_by_owner(&self, owner: &Address, limit: u32) -> Result<Vec<OwnedAsset>, SourceError>;
        async fn signatures(&self, address: &Address, limit: usize) -> Result<Vec<SignatureEntry>, SourceError>;
    }
}

// ============================================================================
// Test Fixtures
// ============================================================================

fn settings() -> ScanSettings {
    ScanSettings {
        request_timeout: Duration::from_secs(1),
        ..Default::default()
    }
}

fn fungible(name: &str, raw_balance: u64, decimals: u8) -> OwnedAsset {
    OwnedAsset {
        id: format!("{}Mint", name),
        interface: "FungibleToken".to_string(),
        name: Some(name.to_string()),
        raw_balance: Some(raw_balance),
        decimals: Some(decimals),
    }
}

fn collectible(interface: &str) -> OwnedAsset {
    OwnedAsset {
        id: format!("{}Mint", interface),
        interface: interface.to_string(),
        name: None,
        raw_balance: None,
        decimals: None,
    }
}

fn signatures(count: usize) -> Vec<SignatureEntry> {
    (0..count)
        .map(|i| SignatureEntry {
            signature: format!("Sig{}", i),
            succeeded: i % 3 != 0,
            block_time: Some(1_706_745_600 - i as i64 * 60),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_wallet_queries_and_summary() {
    let mut chain = MockChain::new();
    chain
        .expect_balance()
        .withf(|address| address.as_str() == WALLET)
        .times(1)
        .returning(|_| Ok(1_250_000_000));
    chain
        .expect_assets_by_owner()
        .withf(|owner, limit| owner.as_str() == WALLET && *limit == 100)
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                fungible("Bonk", 1_000_000, 5),      // 10
                fungible("Dust", 0, 6),              // zero balance, counted but not listed
                fungible("Jupiter", 5_000_000, 6),   // 5
                fungible("Wif", 120_000_000, 6),     // 120
                fungible("Ray", 7_000_000, 6),       // 7
                fungible("Orca", 1_000_000, 6),      // 1
                fungible("Pyth", 30_000_000, 6),     // 30
                collectible("V1_NFT"),
                collectible("ProgrammableNFT"),
            ])
        });
    chain
        .expect_signatures()
        .withf(|address, limit| address.as_str() == WALLET && *limit == 10)
        .times(1)
        .returning(|_, _| Ok(signatures(10)));
    chain.expect_asset().never();
    chain.expect_largest_holders().never();

    let summarizer = WalletSummarizer::new(Arc::new(chain), &settings());
    let report = summarizer.summarize(WALLET).await.unwrap();

    assert_eq!(report.lamports, 1_250_000_000);
    assert_eq!(report.sol_balance, 1.25);
    assert_eq!(report.token_count, 7);
    assert_eq!(report.nft_count, 2);

    let names: Vec<&str> = report.top_holdings.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Wif", "Pyth", "Bonk", "Ray", "Jupiter"]);

    assert_eq!(report.recent_transactions.len(), 10);
    assert!(!report.recent_transactions[0].succeeded);
    assert!(report.recent_transactions[1].succeeded);
}

#[tokio::test]
async fn test_wallet_not_found_on_rpc_error() {
    let mut chain = MockChain::new();
    chain.expect_balance().times(1).returning(|_| {
        Err(SourceError::Rpc {
            code: -32602,
            message: "Invalid param: Invalid".to_string(),
        })
    });
    chain.expect_assets_by_owner().returning(|_, _| Ok(Vec::new()));
    chain.expect_signatures().returning(|_, _| Ok(Vec::new()));

    let summarizer = WalletSummarizer::new(Arc::new(chain), &settings());
    let err = summarizer.summarize(WALLET).await.unwrap_err();

    assert_eq!(err, ScanError::WalletNotFound(WALLET.to_string()));
    assert!(err.to_string().contains("Wallet not found"));
}

#[tokio::test]
async fn test_invalid_address_makes_no_queries() {
    let mut chain = MockChain::new();
    chain.expect_balance().never();
    chain.expect_assets_by_owner().never();
    chain.expect_signatures().never();

    let summarizer = WalletSummarizer::new(Arc::new(chain), &settings());
    let err = summarizer.summarize("not-a-wallet").await.unwrap_err();

    assert!(matches!(err, ScanError::InvalidAddress { length: 12, .. }));
    assert_eq!(
        err.to_string(),
        "Invalid address length (12 chars). Please check input."
    );
}

#[tokio::test]
async fn test_custom_limits_are_forwarded() {
    let mut chain = MockChain::new();
    chain.expect_balance().returning(|_| Ok(0));
    chain
        .expect_assets_by_owner()
        .withf(|_, limit| *limit == 25)
        .times(1)
        .returning(|_, _| Ok(vec![fungible("A", 3, 0), fungible("B", 2, 0), fungible("C", 1, 0)]));
    chain
        .expect_signatures()
        .withf(|_, limit| *limit == 3)
        .times(1)
        .returning(|_, _| Ok(signatures(3)));

    let settings = ScanSettings {
        top_holdings: 2,
        recent_transactions: 3,
        assets_page_limit: 25,
        ..settings()
    };
    let summarizer = WalletSummarizer::new(Arc::new(chain), &settings);
    let report = summarizer.summarize(WALLET).await.unwrap();

    assert_eq!(report.top_holdings.len(), 2);
    assert_eq!(report.recent_transactions.len(), 3);
}

#[tokio::test]
async fn test_balance_timeout_ends_lookup() {
    let mut chain = MockChain::new();
    chain.expect_balance().times(1).returning(|_| Err(SourceError::Timeout(Duration::from_secs(1))));
    chain.expect_assets_by_owner().returning(|_, _| Ok(vec![fungible("Bonk", 1, 0)]));
    chain.expect_signatures().returning(|_, _| Ok(signatures(2)));

    let summarizer = WalletSummarizer::new(Arc::new(chain), &settings());
    let err = summarizer.summarize(WALLET).await.unwrap_err();

    match err {
        ScanError::UpstreamUnavailable { source_name, reason } => {
            assert_eq!(source_name, "chain-index");
            assert!(reason.starts_with("balance"));
        }
        other => panic!("expected UpstreamUnavailable, got {:?}", other),
    }
}
