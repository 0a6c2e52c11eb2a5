//! Solscan explorer links

const SOLSCAN_BASE: &str = "https://solscan.io";

pub fn token_url(mint: &str) -> String {
    format!("{}/token/{}", SOLSCAN_BASE, mint)
}

pub fn account_url(address: &str) -> String {
    format!("{}/account/{}", SOLSCAN_BASE, address)
}

pub fn tx_url(signature: &str) -> String {
    format!("{}/tx/{}", SOLSCAN_BASE, signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(token_url("Mint1"), "https://solscan.io/token/Mint1");
        assert_eq!(account_url("Acc1"), "https://solscan.io/account/Acc1");
        assert_eq!(tx_url("Sig1"), "https://solscan.io/tx/Sig1");
    }
}
