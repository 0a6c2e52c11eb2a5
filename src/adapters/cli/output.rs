//! Report Printer
//!
//! Renders token and wallet reports for the terminal, either as aligned text
//! or as JSON. Rendering returns a `String`; `main` decides where it goes.

use std::fmt;

use serde_json::{json, Value};

use crate::domain::address::truncate_middle;
use crate::domain::explorer;
use crate::domain::{TokenAnalysis, Verdict, WalletReport};

/// Compact USD figure: $1.23B, $4.56M, $7.89K, $12.34
pub fn format_usd(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1e9 {
        format!("{}${:.2}B", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}${:.2}M", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}${:.2}K", sign, abs / 1e3)
    } else {
        format!("{}${:.2}", sign, abs)
    }
}

/// Token price; sub-cent prices keep significant digits
pub fn format_price(price: f64) -> String {
    if price >= 1.0 {
        format!("${:.4}", price)
    } else if price >= 0.01 {
        format!("${:.6}", price)
    } else {
        format!("${:.10}", price)
    }
}

/// Grouped integer part with up to `decimals` fraction digits: 1,234,567.89
pub fn format_amount(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub fn render_token_text(analysis: &TokenAnalysis) -> String {
    TokenView(analysis).to_string()
}

pub fn render_wallet_text(report: &WalletReport) -> String {
    WalletView(report).to_string()
}

struct TokenView<'a>(&'a TokenAnalysis);

impl fmt::Display for TokenView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = &self.0.report;
        let risk = &self.0.risk;

        writeln!(f, "{} ({})", report.name, report.symbol)?;
        writeln!(f, "  Mint:        {}", report.mint)?;
        writeln!(f, "  Explorer:    {}", explorer::token_url(&report.mint))?;
        writeln!(f)?;

        let score = match risk.score {
            Some(s) => format!("{}/100", s),
            None => "n/a".to_string(),
        };
        writeln!(f, "Risk: {} ({})", risk.verdict.label(), score)?;
        writeln!(f, "  {}", risk.verdict.description())?;
        for flag in &risk.flags {
            writeln!(f, "  ! {} (-{})", flag.description(), flag.penalty())?;
        }
        if risk.verdict == Verdict::Safe {
            writeln!(f, "  Mint and freeze authorities revoked, metadata immutable")?;
        }
        writeln!(f)?;

        writeln!(f, "Market")?;
        match &report.pair {
            Some(pair) => {
                let arrow = if pair.price_up() { "▲" } else { "▼" };
                let change = pair
                    .price_change_24h
                    .map(|c| format!("{} {:+.2}%", arrow, c))
                    .unwrap_or_else(|| "-".to_string());
                writeln!(f, "  Price:       {}  {}", or_dash(pair.price_usd.map(format_price)), change)?;
                writeln!(f, "  Liquidity:   {}", or_dash(pair.liquidity_usd.map(format_usd)))?;
                writeln!(f, "  FDV:         {}", or_dash(pair.fully_diluted_valuation.map(format_usd)))?;
                writeln!(f, "  Volume 24h:  {}", or_dash(pair.volume_24h.map(format_usd)))?;
                writeln!(f, "  DEX:         {}", or_dash(pair.dex_id.clone()))?;
                writeln!(f, "  Age:         {}", or_dash(report.age_days.map(|d| format!("{} days", d))))?;
            }
            None => writeln!(f, "  Not trading on any tracked DEX")?,
        }
        writeln!(f)?;

        if let Some(info) = &report.mint_info {
            let supply = match (report.ui_supply, info.decimals()) {
                (Some(s), Some(d)) => format!("{} ({} decimals)", format_amount(s, 2), d),
                _ => "-".to_string(),
            };
            writeln!(f, "Token")?;
            writeln!(f, "  Supply:      {}", supply)?;
            writeln!(f, "  Interface:   {}", or_dash(info.interface.clone()))?;
            writeln!(f, "  Program:     {}", or_dash(info.owner_program.clone()))?;
            writeln!(f)?;
        }

        if !report.holders.is_empty() {
            writeln!(f, "Top holders")?;
            for holder in &report.holders {
                let pct = holder
                    .pct_of_supply
                    .map(|p| format!("{:6.2}%", p))
                    .unwrap_or_else(|| "      -".to_string());
                let whale = if holder.is_whale { "WHALE" } else { "" };
                writeln!(
                    f,
                    "  {:>2}  {:<11}  {:>22}  {}  {:<5}  {}",
                    holder.rank,
                    truncate_middle(&holder.address),
                    format_amount(holder.ui_amount, 2),
                    pct,
                    whale,
                    explorer::account_url(&holder.address)
                )?;
            }
            if let Some(top5) = report.top5_concentration_pct {
                writeln!(f, "  Top 5 hold {:.2}% of supply", top5)?;
            }
        }
        Ok(())
    }
}

struct WalletView<'a>(&'a WalletReport);

impl fmt::Display for WalletView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "Wallet {}", report.address)?;
        writeln!(f, "  Explorer:    {}", explorer::account_url(&report.address))?;
        writeln!(f, "  SOL:         {:.4}", report.sol_balance)?;
        writeln!(f, "  Tokens:      {}", report.token_count)?;
        writeln!(f, "  NFTs:        {}", report.nft_count)?;
        writeln!(f)?;

        if !report.top_holdings.is_empty() {
            writeln!(f, "Top holdings")?;
            for holding in &report.top_holdings {
                writeln!(f, "  {:<24} {:>22}", holding.name, format_amount(holding.ui_balance, 4))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Recent transactions")?;
        if report.recent_transactions.is_empty() {
            writeln!(f, "  none")?;
        }
        for tx in &report.recent_transactions {
            let status = if tx.succeeded { "ok  " } else { "FAIL" };
            let when = tx
                .block_time
                .and_then(|t| chrono::DateTime::from_timestamp(t, 0))
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(f, "  {}  {:<16}  {}", status, when, explorer::tx_url(&tx.signature))?;
        }
        Ok(())
    }
}

/// Token analysis as JSON, with the derived presentation fields added
pub fn token_json(analysis: &TokenAnalysis) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(analysis)?;
    if let Value::Object(map) = &mut value {
        map.insert("explorer_url".to_string(), json!(explorer::token_url(&analysis.report.mint)));
        map.insert(
            "price_up".to_string(),
            json!(analysis.report.pair.as_ref().map(|p| p.price_up())),
        );
        if let Some(Value::Array(holders)) = map
            .get_mut("report")
            .and_then(|report| report.get_mut("holders"))
        {
            for holder in holders.iter_mut().filter_map(Value::as_object_mut) {
                let url = holder
                    .get("address")
                    .and_then(Value::as_str)
                    .map(explorer::account_url);
                if let Some(url) = url {
                    holder.insert("account_url".to_string(), json!(url));
                }
            }
        }
    }
    Ok(value)
}

pub fn wallet_json(report: &WalletReport) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(report)?;
    if let Value::Object(map) = &mut value {
        map.insert("explorer_url".to_string(), json!(explorer::account_url(&report.address)));
    }
    Ok(value)
}
