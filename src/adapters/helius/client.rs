//! Helius RPC Client
//!
//! JSON-RPC over HTTP POST against a Helius endpoint (or a key-holding proxy
//! in front of it). Standard Solana methods and the DAS extensions share the
//! same envelope, so every call goes through [`HeliusClient::call`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use super::types::{
    AssetPage, AssetResult, ContextValue, LargestAccount, RpcRequest, RpcResponse, SignatureInfo,
};
use crate::domain::{Address, HolderEntry, MintInfo, OwnedAsset, SignatureEntry};
use crate::ports::{ChainDataPort, SourceError};

/// Default Helius mainnet RPC endpoint
pub const HELIUS_RPC_URL: &str = "https://mainnet.helius-rpc.com/";

#[derive(Debug, Error)]
pub enum HeliusError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Configuration for the HeliusClient
#[derive(Debug, Clone)]
pub struct HeliusConfig {
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Appended as the `api-key` query parameter when set
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HeliusConfig {
    fn default() -> Self {
        Self {
            rpc_url: HELIUS_RPC_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeliusClient {
    endpoint: String,
    http: Client,
}

impl HeliusClient {
    pub fn with_config(config: HeliusConfig) -> Result<Self, HeliusError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        let endpoint = endpoint_url(&config.rpc_url, config.api_key.as_deref());
        Ok(Self { endpoint, http })
    }

    /// Issue one JSON-RPC call. `Ok(None)` when the response has neither
    /// result nor error.
    async fn call<T: DeserializeOwned>(
        &self,
        id: &str,
        method: &str,
        params: Value,
    ) -> Result<Option<T>, SourceError> {
        tracing::debug!("Helius RPC {} ({})", method, id);

        let request = RpcRequest::new(id, method, params);
        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("{} response: {}", method, e)))?;
        parse_envelope(body)
    }

    /// Like `call`, but a missing result is a parse error
    async fn call_required<T: DeserializeOwned>(
        &self,
        id: &str,
        method: &str,
        params: Value,
    ) -> Result<T, SourceError> {
        self.call(id, method, params)
            .await?
            .ok_or_else(|| SourceError::Parse(format!("{} returned no result", method)))
    }
}

/// Build the POST target, appending the API key when one is configured
pub fn endpoint_url(rpc_url: &str, api_key: Option<&str>) -> String {
    match api_key.filter(|k| !k.is_empty()) {
        Some(key) => {
            let sep = if rpc_url.contains('?') { '&' } else { '?' };
            format!("{}{}api-key={}", rpc_url, sep, key)
        }
        None => rpc_url.to_string(),
    }
}

/// Unwrap a JSON-RPC envelope; an `error` member wins over any `result`
pub fn parse_envelope<T>(body: RpcResponse<T>) -> Result<Option<T>, SourceError> {
    if let Some(err) = body.error {
        return Err(SourceError::Rpc { code: err.code, message: err.message });
    }
    Ok(body.result)
}

#[async_trait]
impl ChainDataPort for HeliusClient {
    async fn asset(&self, mint: &Address) -> Result<Option<MintInfo>, SourceError> {
        let result: Option<AssetResult> = self
            .call("sol-scanner-asset", "getAsset", json!({ "id": mint.as_str() }))
            .await?;
        Ok(result.map(MintInfo::from))
    }

    async fn largest_holders(&self, mint: &Address) -> Result<Vec<HolderEntry>, SourceError> {
        let result: ContextValue<Vec<LargestAccount>> = self
            .call_required("sol-scanner-holders", "getTokenLargestAccounts", json!([mint.as_str()]))
            .await?;
        Ok(result.value.into_iter().map(HolderEntry::from).collect())
    }

    async fn balance(&self, address: &Address) -> Result<u64, SourceError> {
        let result: ContextValue<u64> = self
            .call_required("sol-scanner-balance", "getBalance", json!([address.as_str()]))
            .await?;
        Ok(result.value)
    }

    async fn assets_by_owner(&self, owner: &Address, limit: u32) -> Result<Vec<OwnedAsset>, SourceError> {
        let params = json!({
            "ownerAddress": owner.as_str(),
            "page": 1,
            "limit": limit,
            "displayOptions": {
                "showFungible": true,
                "showNativeBalance": true
            }
        });
        let page: AssetPage = self
            .call_required("sol-scanner-assets", "getAssetsByOwner", params)
            .await?;
        tracing::debug!("getAssetsByOwner: {} items (total {:?})", page.items.len(), page.total);
        Ok(page.items.into_iter().map(OwnedAsset::from).collect())
    }

    async fn signatures(&self, address: &Address, limit: usize) -> Result<Vec<SignatureEntry>, SourceError> {
        let infos: Vec<SignatureInfo> = self
            .call_required(
                "sol-scanner-signatures",
                "getSignaturesForAddress",
                json!([address.as_str(), { "limit": limit }]),
            )
            .await?;
        Ok(infos.into_iter().map(SignatureEntry::from).collect())
    }
}
