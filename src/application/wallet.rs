//! Wallet Summarizer
//!
//! Balance, owned assets and signature history, fetched concurrently.
//! The balance query decides whether the wallet exists; the other two fail soft.

use std::sync::Arc;
use std::time::Duration;

use super::fetchers::{absorb, bounded, CHAIN_SOURCE};
use super::scanner::ScanSettings;
use crate::domain::wallet::summarize_wallet;
use crate::domain::{Address, ScanError, WalletReport};
use crate::ports::{ChainDataPort, SourceError};

pub struct WalletSummarizer {
    chain: Arc<dyn ChainDataPort>,
    timeout: Duration,
    top_holdings: usize,
    recent_transactions: usize,
    assets_page_limit: u32,
}

impl WalletSummarizer {
    pub fn new(chain: Arc<dyn ChainDataPort>, settings: &ScanSettings) -> Self {
        Self {
            chain,
            timeout: settings.request_timeout,
            top_holdings: settings.top_holdings,
            recent_transactions: settings.recent_transactions,
            assets_page_limit: settings.assets_page_limit,
        }
    }

    pub async fn summarize(&self, raw: &str) -> Result<WalletReport, ScanError> {
        let address = Address::parse(raw)?;
        tracing::info!("Summarizing wallet {}", address.short());

        let (balance, assets, signatures) = tokio::join!(
            bounded(self.timeout, self.chain.balance(&address)),
            bounded(self.timeout, self.chain.assets_by_owner(&address, self.assets_page_limit)),
            bounded(self.timeout, self.chain.signatures(&address, self.recent_transactions)),
        );

        let lamports = match balance {
            Ok(lamports) => lamports,
            Err(SourceError::Rpc { code, message }) => {
                tracing::debug!("getBalance RPC error {}: {}", code, message);
                return Err(ScanError::WalletNotFound(address.to_string()));
            }
            Err(e) => return Err(ScanError::upstream(CHAIN_SOURCE, format!("balance: {}", e))),
        };
        let assets = absorb(CHAIN_SOURCE, "owned assets", assets);
        let signatures = absorb(CHAIN_SOURCE, "signatures", signatures);

        let report = summarize_wallet(
            address.as_str(),
            lamports,
            &assets,
            signatures,
            self.top_holdings,
            self.recent_transactions,
        );
        tracing::info!(
            "Wallet {}: {:.4} SOL, {} tokens, {} NFTs",
            address.short(),
            report.sol_balance,
            report.token_count,
            report.nft_count
        );
        Ok(report)
    }
}
