//! In-memory port implementations that record calls and return canned responses

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{ChainDataPort, MarketDataPort, SourceError};
use crate::domain::{Address, HolderEntry, MintInfo, OwnedAsset, SignatureEntry, TradingPair};

/// Mock market data port
#[derive(Debug, Clone)]
pub struct MockMarketData {
    calls: Arc<Mutex<Vec<String>>>,
    pairs: Result<Vec<TradingPair>, SourceError>,
    delay: Option<Duration>,
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self {
            calls: Arc::default(),
            pairs: Ok(Vec::new()),
            delay: None,
        }
    }
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the pairs returned for any mint
    pub fn with_pairs(mut self, pairs: Vec<TradingPair>) -> Self {
        self.pairs = Ok(pairs);
        self
    }

    /// Builder method to make every call fail
    pub fn with_error(mut self, error: SourceError) -> Self {
        self.pairs = Err(error);
        self
    }

    /// Builder method to sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataPort for MockMarketData {
    async fn token_pairs(&self, mint: &Address) -> Result<Vec<TradingPair>, SourceError> {
        self.calls.lock().unwrap().push(format!("token_pairs:{}", mint));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.pairs.clone()
    }
}

/// Mock chain-indexing port
#[derive(Debug, Clone)]
pub struct MockChainData {
    calls: Arc<Mutex<Vec<String>>>,
    asset: Result<Option<MintInfo>, SourceError>,
    holders: Result<Vec<HolderEntry>, SourceError>,
    balance: Result<u64, SourceError>,
    owned_assets: Result<Vec<OwnedAsset>, SourceError>,
    signatures: Result<Vec<SignatureEntry>, SourceError>,
    delay: Option<Duration>,
}

impl Default for MockChainData {
    fn default() -> Self {
        Self {
            calls: Arc::default(),
            asset: Ok(None),
            holders: Ok(Vec::new()),
            balance: Ok(0),
            owned_assets: Ok(Vec::new()),
            signatures: Ok(Vec::new()),
            delay: None,
        }
    }
}

impl MockChainData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, asset: Result<Option<MintInfo>, SourceError>) -> Self {
        self.asset = asset;
        self
    }

    pub fn with_holders(mut self, holders: Result<Vec<HolderEntry>, SourceError>) -> Self {
        self.holders = holders;
        self
    }

    pub fn with_balance(mut self, balance: Result<u64, SourceError>) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_owned_assets(mut self, assets: Result<Vec<OwnedAsset>, SourceError>) -> Self {
        self.owned_assets = assets;
        self
    }

    pub fn with_signatures(mut self, signatures: Result<Vec<SignatureEntry>, SourceError>) -> Self {
        self.signatures = signatures;
        self
    }

    /// Builder method to sleep before answering every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ChainDataPort for MockChainData {
    async fn asset(&self, mint: &Address) -> Result<Option<MintInfo>, SourceError> {
        self.record(format!("asset:{}", mint)).await;
        self.asset.clone()
    }

    async fn largest_holders(&self, mint: &Address) -> Result<Vec<HolderEntry>, SourceError> {
        self.record(format!("largest_holders:{}", mint)).await;
        self.holders.clone()
    }

    async fn balance(&self, address: &Address) -> Result<u64, SourceError> {
        self.record(format!("balance:{}", address)).await;
        self.balance.clone()
    }

    async fn assets_by_owner(&self, owner: &Address, limit: u32) -> Result<Vec<OwnedAsset>, SourceError> {
        self.record(format!("assets_by_owner:{}:{}", owner, limit)).await;
        self.owned_assets.clone()
    }

    async fn signatures(&self, address: &Address, limit: usize) -> Result<Vec<SignatureEntry>, SourceError> {
        self.record(format!("signatures:{}:{}", address, limit)).await;
        self.signatures.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> Address {
        Address::parse("So11111111111111111111111111111111111111112").unwrap()
    }

    #[tokio::test]
    async fn test_mock_market_data() {
        let mock = MockMarketData::new().with_pairs(vec![TradingPair::default()]);

        let result = mock.token_pairs(&addr()).await;
        assert_eq!(result.unwrap().len(), 1);
        assert_eq!(mock.get_calls(), vec![format!("token_pairs:{}", addr())]);
    }

    #[tokio::test]
    async fn test_mock_chain_data_error() {
        let mock = MockChainData::new().with_balance(Err(SourceError::Rpc {
            code: -32602,
            message: "Invalid param".to_string(),
        }));

        assert!(matches!(mock.balance(&addr()).await, Err(SourceError::Rpc { code: -32602, .. })));
        assert_eq!(mock.get_calls().len(), 1);
    }
}
