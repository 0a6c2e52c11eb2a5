//! Helius Adapter
//!
//! Chain-indexing source over JSON-RPC:
//! - `getAsset` / `getAssetsByOwner` (DAS)
//! - `getTokenLargestAccounts`, `getBalance`, `getSignaturesForAddress`

mod client;
mod types;

pub use client::{endpoint_url, parse_envelope, HeliusClient, HeliusConfig, HeliusError, HELIUS_RPC_URL};
pub use types::{AssetResult, RpcRequest, RpcResponse};
