pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "compound-interest-api")]
#[command(about = "Compute compound interest the same way the HTTP endpoint does")]
pub struct CliConfig {
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = parse_finite,
        help = "Initial amount"
    )]
    pub principal: Option<f64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = parse_finite,
        help = "Annual interest rate in percent (0-100)"
    )]
    pub rate: Option<f64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = parse_finite,
        help = "Term in years"
    )]
    pub years: Option<f64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = parse_finite,
        help = "Compounding periods per year (1, 2, 4, 12 or 365)"
    )]
    pub frequency: Option<f64>,

    #[arg(long, help = "Raw JSON request body; takes precedence over the field flags")]
    pub body: Option<String>,

    #[arg(long, help = "Pretty-print the JSON response")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// `f64` 參數解析，拒絕 NaN 與無限大（JSON 無法表示）
#[cfg(feature = "cli")]
fn parse_finite(value: &str) -> std::result::Result<f64, String> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number '{}': {}", value, e))?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("'{}' is not a finite number", value))
    }
}
