//! # toolrs Zip Command Group
//!
//! File: cli/src/commands/zip/mod.rs
//!
//! Entry point for `toolrs zip`. There is a single subcommand, `all`, which
//! packs a whole directory into a ZIP archive.
//!
//! ```bash
//! toolrs zip all                       # ./<dirname>.zip
//! toolrs zip all --dir ~/notes --output /tmp/notes.zip
//! ```
//!
use crate::core::{context::AppContext, error::Result};
use clap::{Parser, Subcommand};

/// Implements `toolrs zip all`.
mod all;

#[derive(Parser, Debug)]
pub struct ZipArgs {
    #[command(subcommand)]
    command: ZipCommand,
}

#[derive(Subcommand, Debug)]
enum ZipCommand {
    /// Zip every file in a directory, including hidden ones.
    All(all::AllArgs),
}

pub async fn handle_zip(args: ZipArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        ZipCommand::All(args) => all::handle_all(args, ctx).await?,
    }
    Ok(())
}
