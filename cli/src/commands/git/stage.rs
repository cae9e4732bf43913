//! # toolrs Git Stage Handler
//!
//! File: cli/src/commands/git/stage.rs
//!
//! Implements `toolrs git stage [PATH]` (`git add`, all paths by default).
//!
use crate::core::{context::AppContext, error::Result};
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Stage changes (git add)")]
pub struct StageArgs {
    /// Path to stage. Defaults to every change.
    path: Option<String>,
}

pub async fn handle_stage(args: StageArgs, ctx: &AppContext) -> Result<()> {
    let git = ctx.git();
    git.ensure_available().await?;
    let target = args.path.as_deref().unwrap_or(".");
    git.stage(args.path.as_deref())
        .await
        .with_context(|| format!("Failed to stage '{}'", target))?;
    println!("✅ Staged '{}'.", target);
    Ok(())
}
