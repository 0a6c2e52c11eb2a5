//! Ports Layer - Trait definitions for external data sources
//!
//! Following hexagonal architecture, these traits abstract:
//! - Market data (DEX pairs for a mint)
//! - Chain indexing (asset metadata, holders, balances, owned assets, signatures)
//!
//! Adapters in `crate::adapters` implement them over HTTP; `mocks` provides
//! in-memory versions for tests.

pub mod mocks;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Address, HolderEntry, MintInfo, OwnedAsset, SignatureEntry, TradingPair};

/// Failure of a single external call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            SourceError::Status(status.as_u16())
        } else {
            SourceError::Transport(err.to_string())
        }
    }
}

/// DEX market data keyed by mint
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// All pairs trading the mint, in source order
    async fn token_pairs(&self, mint: &Address) -> Result<Vec<TradingPair>, SourceError>;
}

/// Chain-indexing source (JSON-RPC)
#[async_trait]
pub trait ChainDataPort: Send + Sync {
    /// `getAsset`. `Ok(None)` when the response carries no result.
    async fn asset(&self, mint: &Address) -> Result<Option<MintInfo>, SourceError>;

    /// `getTokenLargestAccounts`
    async fn largest_holders(&self, mint: &Address) -> Result<Vec<HolderEntry>, SourceError>;

    /// `getBalance` in lamports
    async fn balance(&self, address: &Address) -> Result<u64, SourceError>;

    /// `getAssetsByOwner`, first page
    async fn assets_by_owner(&self, owner: &Address, limit: u32) -> Result<Vec<OwnedAsset>, SourceError>;

    /// `getSignaturesForAddress`, newest first
    async fn signatures(&self, address: &Address, limit: usize) -> Result<Vec<SignatureEntry>, SourceError>;
}
