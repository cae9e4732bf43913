//! # toolrs Currency Convert Handler
//!
//! File: cli/src/commands/currency/convert.rs
//!
//! ## Overview
//!
//! Implements `toolrs currency convert`. Missing values are prompted for;
//! every value, given or typed, goes through the same validation. The rate is
//! fetched from `[currency] api_base` and the request is abandoned on Ctrl-C.
//!
use crate::{
    common::{
        network::currency::{describe_conversion, fetch_rate, parse_amount, parse_currency_code},
        ui::prompt,
    },
    core::{
        context::AppContext,
        error::{Result, ToolrsError},
    },
};
use anyhow::anyhow;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Convert an amount between currencies")]
pub struct ConvertArgs {
    /// Amount to convert.
    #[arg(short, long)]
    amount: Option<String>,

    /// Source currency code, e.g. USD.
    #[arg(short, long)]
    from: Option<String>,

    /// Target currency code, e.g. EUR.
    #[arg(short, long)]
    to: Option<String>,
}

pub async fn handle_convert(args: ConvertArgs, ctx: &AppContext) -> Result<()> {
    let amount = parse_amount(&value_or_prompt(args.amount, "Enter the amount to convert")?)?;
    let from = parse_currency_code(&value_or_prompt(
        args.from,
        "Enter the source currency (e.g., USD)",
    )?)?;
    let to = parse_currency_code(&value_or_prompt(
        args.to,
        "Enter the target currency (e.g., EUR)",
    )?)?;
    info!("Converting {} {} to {}", amount, from, to);

    let http = ctx.http_client()?;
    let rate = tokio::select! {
        rate = fetch_rate(&http, &ctx.config.currency.api_base, &from, &to) => rate?,
        _ = ctx.cancel.cancelled() => {
            return Err(anyhow!(ToolrsError::Cancelled {
                operation: "currency rate lookup".to_string(),
            }));
        }
    };

    println!("{}", describe_conversion(amount, &from, &to, rate));
    Ok(())
}

fn value_or_prompt(value: Option<String>, question: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt::ask(question, None),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_args() {
        let args =
            ConvertArgs::try_parse_from(["convert", "-a", "12.5", "--from", "usd", "--to", "brl"])
                .unwrap();
        assert_eq!(args.amount.as_deref(), Some("12.5"));
        assert_eq!(args.from.as_deref(), Some("usd"));
        assert_eq!(args.to.as_deref(), Some("brl"));
    }

    #[test]
    fn test_given_value_skips_prompt() {
        assert_eq!(value_or_prompt(Some("EUR".into()), "unused").unwrap(), "EUR");
    }
}
