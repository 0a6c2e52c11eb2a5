//! On-Chain Asset Types
//!
//! Mint metadata, supply and authority information as reported by the
//! chain-indexing source, and the largest-holder entries for a mint.

use serde::{Deserialize, Serialize};

/// Authority keys on a mint. `None` means revoked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityInfo {
    /// Mint authority - can create new supply
    pub mint_authority: Option<String>,
    /// Freeze authority - can freeze holder accounts
    pub freeze_authority: Option<String>,
}

impl AuthorityInfo {
    pub fn new(mint_authority: Option<String>, freeze_authority: Option<String>) -> Self {
        Self { mint_authority, freeze_authority }
    }

    /// Returns true if the mint authority is still set
    pub fn mint_authority_present(&self) -> bool {
        self.mint_authority.is_some()
    }

    /// Returns true if the freeze authority is still set
    pub fn freeze_authority_present(&self) -> bool {
        self.freeze_authority.is_some()
    }
}

/// Supply and authority section of a fungible mint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyInfo {
    /// Supply in base units
    pub raw_supply: u64,
    /// Number of decimal places
    pub decimals: u8,
    pub authority: AuthorityInfo,
}

impl SupplyInfo {
    /// Supply adjusted for decimals
    pub fn ui_supply(&self) -> f64 {
        self.raw_supply as f64 / 10f64.powi(self.decimals as i32)
    }
}

/// Mint metadata from the indexing source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintInfo {
    /// Token mint address
    pub mint: String,
    /// Metadata name
    pub name: Option<String>,
    /// Metadata symbol
    pub symbol: Option<String>,
    /// Token standard tag (e.g. "FungibleToken")
    pub interface: Option<String>,
    /// Program that owns the asset
    pub owner_program: Option<String>,
    /// Whether the metadata can still be changed
    pub is_metadata_mutable: bool,
    /// Present for fungible mints only
    pub supply: Option<SupplyInfo>,
}

impl MintInfo {
    pub fn ui_supply(&self) -> Option<f64> {
        self.supply.as_ref().map(SupplyInfo::ui_supply)
    }

    pub fn decimals(&self) -> Option<u8> {
        self.supply.as_ref().map(|s| s.decimals)
    }
}

/// One of the largest token accounts for a mint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolderEntry {
    /// Token account address
    pub address: String,
    /// Balance adjusted for decimals
    pub ui_amount: f64,
}

impl HolderEntry {
    pub fn new(address: impl Into<String>, ui_amount: f64) -> Self {
        Self { address: address.into(), ui_amount }
    }
}
