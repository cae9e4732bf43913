//! # toolrs Git Unstage Handler
//!
//! File: cli/src/commands/git/unstage.rs
//!
//! Implements `toolrs git unstage [PATH]` (`git reset`, all paths by default).
//!
use crate::core::{context::AppContext, error::Result};
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Unstage changes (git reset)")]
pub struct UnstageArgs {
    /// Path to unstage. Defaults to every staged change.
    path: Option<String>,
}

pub async fn handle_unstage(args: UnstageArgs, ctx: &AppContext) -> Result<()> {
    let git = ctx.git();
    git.ensure_available().await?;
    let target = args.path.as_deref().unwrap_or(".");
    git.unstage(args.path.as_deref())
        .await
        .with_context(|| format!("Failed to unstage '{}'", target))?;
    println!("✅ Unstaged '{}'.", target);
    Ok(())
}
