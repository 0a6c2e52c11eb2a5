//! sol-scanner - Solana token and wallet risk scanner library
//!
//! Turns a mint or wallet address into a report: DEX market data, mint
//! authorities, holder concentration, wallet holdings and a safety score.
//!
//! # Modules
//!
//! - `domain`: Core logic (address gate, pair selection, aggregation, risk scoring, wallet summary)
//! - `ports`: Trait abstractions (MarketDataPort, ChainDataPort) and in-memory mocks
//! - `adapters`: External implementations (DexScreener, Helius, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Token scanner and wallet summarizer pipelines

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
