//! # toolrs Currency Command Group
//!
//! File: cli/src/commands/currency/mod.rs
//!
//! Entry point for `toolrs currency`. `convert` looks up the current rate
//! between two currencies and prints the converted amount.
//!
//! ```bash
//! toolrs currency convert --amount 100 --from usd --to eur
//! toolrs currency convert              # asks for each value
//! ```
//!
use crate::core::{context::AppContext, error::Result};
use clap::{Parser, Subcommand};

/// Implements `toolrs currency convert`.
mod convert;

#[derive(Parser, Debug)]
pub struct CurrencyArgs {
    #[command(subcommand)]
    command: CurrencyCommand,
}

#[derive(Subcommand, Debug)]
enum CurrencyCommand {
    /// Convert an amount between two currencies.
    Convert(convert::ConvertArgs),
}

pub async fn handle_currency(args: CurrencyArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        CurrencyCommand::Convert(args) => convert::handle_convert(args, ctx).await?,
    }
    Ok(())
}
