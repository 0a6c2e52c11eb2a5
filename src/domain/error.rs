//! Scan Error Taxonomy
//!
//! Every variant ends a token or wallet lookup. Soft upstream failures are
//! absorbed by the fetchers; `UpstreamUnavailable` is raised only when the
//! failing call is the sole source for the result, as with a wallet balance.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Address failed the length gate
    #[error("Invalid address length ({length} chars). Please check input.")]
    InvalidAddress { input: String, length: usize },

    /// Neither the market-data source nor the chain-indexing source knows the mint
    #[error("Token not found on-chain: {0}. It may not exist or the address is incorrect.")]
    NotFound(String),

    /// Balance query returned an RPC error for the address
    #[error("Wallet not found or invalid address: {0}")]
    WalletNotFound(String),

    /// An external call failed or timed out
    #[error("Upstream {source_name} unavailable: {reason}")]
    UpstreamUnavailable { source_name: String, reason: String },
}

impl ScanError {
    pub fn upstream(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        ScanError::UpstreamUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScanError::InvalidAddress { input: "abc".into(), length: 3 };
        assert!(err.to_string().contains("Invalid address length"));

        let err = ScanError::NotFound("Mint111".into());
        assert!(err.to_string().contains("Token not found"));

        let err = ScanError::upstream("helius", "timed out");
        assert_eq!(err.to_string(), "Upstream helius unavailable: timed out");
    }
}
