//! # toolrs Git Revert Handler
//!
//! File: cli/src/commands/git/revert.rs
//!
//! Implements `toolrs git revert`: `git reset --soft HEAD~1`. The last commit
//! is undone and its changes stay staged.
//!
use crate::core::{context::AppContext, error::Result};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Soft revert the last commit, keeping changes in the working directory")]
pub struct RevertArgs {}

pub async fn handle_revert(_args: RevertArgs, ctx: &AppContext) -> Result<()> {
    info!("Handling git revert command...");
    let git = ctx.git();
    git.ensure_available().await?;
    git.soft_revert()
        .await
        .context("Failed to soft revert the last commit")?;
    println!(
        "✅ The last commit has been successfully soft reverted. Changes are still in the working directory."
    );
    Ok(())
}
