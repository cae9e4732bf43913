//! # toolrs Git Stash Handler
//!
//! File: cli/src/commands/git/stash.rs
//!
//! Implements `toolrs git stash`: `git stash push`, with `-m <message>` when a
//! message is given on the command line or typed at the prompt. An empty
//! answer leaves git's default message.
//!
use crate::{
    common::ui::prompt,
    core::{context::AppContext, error::Result},
};
use anyhow::Context;
use clap::Parser;
use tracing::info;

const MESSAGE_PROMPT: &str = "Enter a message for the stash (leave empty for default message)";

#[derive(Parser, Debug)]
#[command(about = "Stash the current changes")]
pub struct StashArgs {
    /// Stash message. Prompted for when omitted.
    #[arg(short, long)]
    message: Option<String>,
}

pub async fn handle_stash(args: StashArgs, ctx: &AppContext) -> Result<()> {
    info!("Handling git stash command...");
    let git = ctx.git();
    git.ensure_available().await?;

    let message = match args.message {
        Some(message) => Some(message),
        None => prompt::ask_optional(MESSAGE_PROMPT)?,
    };

    git.stash_push(message.as_deref())
        .await
        .context("Failed to stash changes")?;
    println!("✅ Changes have been successfully stashed.");
    Ok(())
}
