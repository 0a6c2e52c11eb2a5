//! Helius JSON-RPC Types
//!
//! Envelope plus the result shapes of the five methods the scanner uses.
//! The DAS methods (`getAsset`, `getAssetsByOwner`) carry far more fields than
//! are modelled here; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{AuthorityInfo, HolderEntry, MintInfo, OwnedAsset, SignatureEntry, SupplyInfo};

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: &'a str,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: &'a str, method: &'a str, params: Value) -> Self {
        Self { jsonrpc: "2.0", id, method, params }
    }
}

/// JSON-RPC 2.0 response; exactly one of `result`/`error` is normally set
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Solana RPC `{ context, value }` wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ContextValue<T> {
    pub value: T,
}

// ============================================================================
// getAsset
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AssetResult {
    pub id: String,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub content: Option<AssetContent>,
    #[serde(default)]
    pub ownership: Option<AssetOwnership>,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub token_info: Option<AssetTokenInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetContent {
    #[serde(default)]
    pub metadata: Option<AssetMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetOwnership {
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetTokenInfo {
    #[serde(default)]
    pub supply: Option<u64>,
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub balance: Option<u64>,
    #[serde(default)]
    pub token_program: Option<String>,
    #[serde(default)]
    pub mint_authority: Option<String>,
    #[serde(default)]
    pub freeze_authority: Option<String>,
}

impl AssetResult {
    fn metadata(&self) -> Option<&AssetMetadata> {
        self.content.as_ref().and_then(|c| c.metadata.as_ref())
    }
}

impl From<AssetResult> for MintInfo {
    fn from(asset: AssetResult) -> Self {
        let name = asset.metadata().and_then(|m| m.name.clone());
        let symbol = asset.metadata().and_then(|m| m.symbol.clone());

        let owner_program = asset
            .token_info
            .as_ref()
            .and_then(|t| t.token_program.clone())
            .or_else(|| asset.ownership.as_ref().and_then(|o| o.owner.clone()));

        // Supply section counts as present only when the indexer reports a supply
        let supply = asset.token_info.and_then(|info| {
            info.supply.map(|raw_supply| SupplyInfo {
                raw_supply,
                decimals: info.decimals.unwrap_or(0),
                authority: AuthorityInfo::new(
                    info.mint_authority.filter(|a| !a.is_empty()),
                    info.freeze_authority.filter(|a| !a.is_empty()),
                ),
            })
        });

        MintInfo {
            mint: asset.id,
            name,
            symbol,
            interface: asset.interface,
            owner_program,
            is_metadata_mutable: asset.mutable,
            supply,
        }
    }
}

// ============================================================================
// getTokenLargestAccounts
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargestAccount {
    pub address: String,
    #[serde(default)]
    pub ui_amount: Option<f64>,
    #[serde(default)]
    pub ui_amount_string: Option<String>,
}

impl From<LargestAccount> for HolderEntry {
    fn from(account: LargestAccount) -> Self {
        let ui_amount = account
            .ui_amount
            .or_else(|| account.ui_amount_string.as_deref().and_then(|s| s.parse().ok()))
            .unwrap_or(0.0);
        HolderEntry::new(account.address, ui_amount)
    }
}

// ============================================================================
// getAssetsByOwner
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AssetPage {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub items: Vec<OwnedAssetItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnedAssetItem {
    pub id: String,
    #[serde(default)]
    pub interface: String,
    #[serde(default)]
    pub content: Option<AssetContent>,
    #[serde(default)]
    pub token_info: Option<AssetTokenInfo>,
}

impl From<OwnedAssetItem> for OwnedAsset {
    fn from(item: OwnedAssetItem) -> Self {
        let name = item
            .content
            .and_then(|c| c.metadata)
            .and_then(|m| m.name)
            .filter(|n| !n.is_empty());
        let (raw_balance, decimals) = match item.token_info {
            Some(info) => (info.balance, info.decimals),
            None => (None, None),
        };

        OwnedAsset {
            id: item.id,
            interface: item.interface,
            name,
            raw_balance,
            decimals,
        }
    }
}

// ============================================================================
// getSignaturesForAddress
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInfo {
    pub signature: String,
    /// `null` for successful transactions
    #[serde(default)]
    pub err: Option<Value>,
    #[serde(default)]
    pub block_time: Option<i64>,
}

impl From<SignatureInfo> for SignatureEntry {
    fn from(info: SignatureInfo) -> Self {
        SignatureEntry {
            signature: info.signature,
            succeeded: info.err.map_or(true, |e| e.is_null()),
            block_time: info.block_time,
        }
    }
}
