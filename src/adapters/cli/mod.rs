//! CLI Adapter
//!
//! Command-line interface for sol-scanner.
//! Uses clap derive macros for argument parsing; `output` is the text/JSON printer.

mod commands;
pub mod output;

pub use commands::{execute, CliApp, Command, OutputFormat, TokenCmd, WalletCmd};
