pub mod fetchers;
pub mod scanner;
pub mod wallet;

pub use fetchers::{bounded, AssetDataFetcher, MarketDataFetcher};
pub use scanner::{ScanSettings, Scanner};
pub use wallet::WalletSummarizer;
