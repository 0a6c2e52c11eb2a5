//! Domain Layer - Core scanning logic
//!
//! Pure types and rules with no I/O. All external data arrives through the
//! ports layer and is normalized here.
//!
//! - `address`: length gate for mint and wallet addresses
//! - `market`: trading pairs and canonical pair selection
//! - `asset`: mint metadata, supply, authorities and largest holders
//! - `risk`: authority risk score, verdict and whale tag
//! - `report`: aggregation into a `TokenReport`
//! - `wallet`: owned-asset classification and `WalletReport`
//! - `explorer`: Solscan links

pub mod address;
pub mod asset;
pub mod error;
pub mod explorer;
pub mod market;
pub mod report;
pub mod risk;
pub mod wallet;

pub use address::Address;
pub use asset::{AuthorityInfo, HolderEntry, MintInfo, SupplyInfo};
pub use error::ScanError;
pub use market::{select_canonical_pair, TradingPair};
pub use report::{aggregate, HolderShare, TokenAnalysis, TokenReport};
pub use risk::{is_whale, RiskAssessment, RiskFlag, RiskScorer, Verdict};
pub use wallet::{OwnedAsset, SignatureEntry, WalletHolding, WalletReport};
