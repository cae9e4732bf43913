//! # toolrs Env Command Group
//!
//! File: cli/src/commands/env/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `toolrs env`, which manages persistent
//! environment variables. Values are written as `export NAME='value'` lines to
//! the shell profile chosen by the credential store (`[credentials]
//! profile_path`, or the first of `~/.zshrc`, `~/.bashrc`, `~/.bash_profile`).
//! The running shell only sees them after `source <profile>`.
//!
//! ## Architecture
//!
//! - `EnvArgs` / `EnvCommand`: the clap surface.
//! - `set` and `unset`: one handler each, both going through
//!   `core::credentials::CredentialStore`.
//!
//! ## Examples
//!
//! ```bash
//! toolrs env set GITHUB_TOKEN ghp_xxx
//! toolrs env set                 # asks for the name and the value
//! toolrs env unset GITHUB_TOKEN
//! ```
//!
use crate::{
    common::ui::prompt,
    core::{
        context::AppContext,
        error::{Result, ToolrsError},
    },
};
use anyhow::anyhow;
use clap::{Parser, Subcommand};

/// Implements `toolrs env set`.
mod set;
/// Implements `toolrs env unset`.
mod unset;

/// # Env Command Group Arguments (`EnvArgs`)
#[derive(Parser, Debug)]
pub struct EnvArgs {
    #[command(subcommand)]
    command: EnvCommand,
}

#[derive(Subcommand, Debug)]
enum EnvCommand {
    /// Persist an environment variable in the shell profile.
    Set(set::SetArgs),
    /// Remove an environment variable from the shell profile.
    #[command(alias = "rm")]
    Unset(unset::UnsetArgs),
}

pub async fn handle_env(args: EnvArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        EnvCommand::Set(args) => set::handle_set(args, ctx)?,
        EnvCommand::Unset(args) => unset::handle_unset(args, ctx)?,
    }
    Ok(())
}

/// Uses `given` or asks `question`; either way the result must be non-empty.
fn required_value(given: Option<String>, question: &str, what: &str) -> Result<String> {
    let value = match given {
        Some(value) => value,
        None => prompt::ask(question, None)?,
    };
    if value.trim().is_empty() {
        return Err(anyhow!(ToolrsError::InvalidInput(format!(
            "{} cannot be empty.",
            what
        ))));
    }
    Ok(value)
}
