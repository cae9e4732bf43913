//! # Currency Conversion (`common::network::currency`)
//!
//! File: cli/src/common/network/currency.rs
//!
//! Looks up `<api_base>/<from>.json`, which answers with
//! `{"date": "...", "<from>": {"<to>": rate, ...}}` using lowercase codes.
//!
use crate::core::error::{Result, ToolrsError};
use anyhow::{anyhow, Context};
use serde_json::Value;
use tracing::debug;

/// Validates a user-supplied amount: a finite number greater than zero.
pub fn parse_amount(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(anyhow!(ToolrsError::InvalidInput(
            "The amount must be a positive number.".to_string()
        ))),
    }
}

/// Validates a three-letter currency code and returns it uppercased.
pub fn parse_currency_code(input: &str) -> Result<String> {
    let code = input.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(anyhow!(ToolrsError::InvalidInput(format!(
            "'{}' is not a 3-letter currency code.",
            code
        ))))
    }
}

/// Extracts the `from -> to` rate from a rate document.
pub fn parse_rate(document: &Value, from: &str, to: &str) -> Option<f64> {
    document
        .get(from.to_ascii_lowercase())?
        .get(to.to_ascii_lowercase())?
        .as_f64()
}

/// Fetches the current `from -> to` rate.
pub async fn fetch_rate(http: &reqwest::Client, api_base: &str, from: &str, to: &str) -> Result<f64> {
    let url = format!(
        "{}/{}.json",
        api_base.trim_end_matches('/'),
        from.to_ascii_lowercase()
    );
    debug!("Fetching rates from {}", url);
    let document: Value = http
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("Failed to fetch conversion rate from {}", url))?
        .json()
        .await
        .context("Failed to fetch conversion rate: invalid response body")?;

    parse_rate(&document, from, to).ok_or_else(|| anyhow!("Invalid target currency."))
}

/// `"<amount> <FROM> is equal to <converted> <TO>"`, converted to two decimals.
pub fn describe_conversion(amount: f64, from: &str, to: &str, rate: f64) -> String {
    format!(
        "{} {} is equal to {:.2} {}",
        amount,
        from.to_ascii_uppercase(),
        amount * rate,
        to.to_ascii_uppercase()
    )
}
