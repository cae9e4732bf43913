//! # toolrs Git Command Group
//!
//! File: cli/src/commands/git/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `toolrs git`, a handful of shortcuts around the
//! `git` binary: stashing and restoring changes, undoing the last commit
//! while keeping its changes, and staging or unstaging paths.
//!
//! Every subcommand first checks that `git` can be run and fails with
//! "'git' is not available on this system." otherwise.
//!
//! ## Examples
//!
//! ```bash
//! toolrs git stash --message "half-done refactor"
//! toolrs git stash-restore            # lists the last 5 stashes and asks which one
//! toolrs git stash-restore --index 0 --drop
//! toolrs git revert                   # git reset --soft HEAD~1
//! toolrs git stage src/main.rs
//! toolrs git unstage
//! ```
//!
use crate::core::{context::AppContext, error::Result};
use clap::{Parser, Subcommand};

/// Implements `toolrs git revert`.
mod revert;
/// Implements `toolrs git stage`.
mod stage;
/// Implements `toolrs git stash`.
mod stash;
/// Implements `toolrs git stash-restore`.
mod stash_restore;
/// Implements `toolrs git unstage`.
mod unstage;

/// # Git Command Group Arguments (`GitArgs`)
#[derive(Parser, Debug)]
pub struct GitArgs {
    #[command(subcommand)]
    command: GitCommand,
}

#[derive(Subcommand, Debug)]
enum GitCommand {
    /// Stash the working tree changes, optionally with a message.
    Stash(stash::StashArgs),
    /// Apply one of the most recent stashes.
    #[command(alias = "restore")]
    StashRestore(stash_restore::StashRestoreArgs),
    /// Soft revert the last commit, keeping its changes.
    Revert(revert::RevertArgs),
    /// Stage a path (everything by default).
    #[command(alias = "add")]
    Stage(stage::StageArgs),
    /// Unstage a path (everything by default).
    Unstage(unstage::UnstageArgs),
}

pub async fn handle_git(args: GitArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        GitCommand::Stash(args) => stash::handle_stash(args, ctx).await?,
        GitCommand::StashRestore(args) => stash_restore::handle_stash_restore(args, ctx).await?,
        GitCommand::Revert(args) => revert::handle_revert(args, ctx).await?,
        GitCommand::Stage(args) => stage::handle_stage(args, ctx).await?,
        GitCommand::Unstage(args) => unstage::handle_unstage(args, ctx).await?,
    }
    Ok(())
}
