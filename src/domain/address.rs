//! Address Validation
//!
//! Length-only gate for candidate Solana addresses. No base58 charset or
//! checksum check is performed: any string of 32 to 44 characters passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ScanError;

/// Shortest accepted address (in characters)
pub const MIN_ADDRESS_LEN: usize = 32;

/// Longest accepted address (in characters)
pub const MAX_ADDRESS_LEN: usize = 44;

/// A mint or wallet address that passed the length gate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Validate a raw string. The input is taken as-is; callers trim it first.
    pub fn parse(raw: &str) -> Result<Self, ScanError> {
        let length = raw.chars().count();
        if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&length) {
            return Err(ScanError::InvalidAddress {
                input: raw.to_string(),
                length,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for tables, e.g. `JUPy...2ct`
    pub fn short(&self) -> String {
        truncate_middle(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Keep the first and last four characters of anything longer than ten
pub fn truncate_middle(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 10 {
        return s.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUP_MINT: &str = "JUPyiwrYJFskUPiHa7hkeR8VUtk641KP9MhvRFPu2ct";

    #[test]
    fn test_valid_mint() {
        let addr = Address::parse(JUP_MINT).unwrap();
        assert_eq!(addr.as_str(), JUP_MINT);
        assert_eq!(addr.to_string(), JUP_MINT);
    }

    #[test]
    fn test_length_boundaries() {
        for len in 0..MIN_ADDRESS_LEN {
            let raw = "a".repeat(len);
            assert!(
                matches!(Address::parse(&raw), Err(ScanError::InvalidAddress { length, .. }) if length == len),
                "length {} should be rejected",
                len
            );
        }
        for len in MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN {
            assert!(Address::parse(&"a".repeat(len)).is_ok(), "length {} should pass", len);
        }
        for len in [45, 46, 64, 88] {
            assert!(Address::parse(&"a".repeat(len)).is_err(), "length {} should be rejected", len);
        }
    }

    #[test]
    fn test_non_base58_accepted() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet but only length is checked
        let raw = "0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl";
        assert_eq!(raw.len(), 32);
        assert!(Address::parse(raw).is_ok());
    }

    #[test]
    fn test_whitespace_counts_toward_length() {
        let padded = format!(" {} ", "a".repeat(44));
        assert!(Address::parse(&padded).is_err());
        assert!(Address::parse(padded.trim()).is_ok());
    }

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle(JUP_MINT), "JUPy...u2ct");
        assert_eq!(truncate_middle("short"), "short");
        assert_eq!(truncate_middle("0123456789"), "0123456789");
    }
}
