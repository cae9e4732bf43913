//! # toolrs Env Unset Handler
//!
//! File: cli/src/commands/env/unset.rs
//!
//! Implements `toolrs env unset [NAME]`. Removing a variable that is not set
//! is reported but is not an error.
//!
use super::required_value;
use crate::core::{context::AppContext, credentials::CredentialStore, error::Result};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Remove a persistent environment variable")]
pub struct UnsetArgs {
    /// Variable name. Prompted for when omitted.
    name: Option<String>,
}

pub fn handle_unset(args: UnsetArgs, ctx: &AppContext) -> Result<()> {
    let name = required_value(args.name, "Enter the variable name to remove", "Variable name")?;
    let name = name.trim();
    info!("Removing environment variable '{}'", name);

    let mut store = ctx.credentials();
    let inherited = store.is_inherited(name);
    let removed = store.remove(name)?;
    if removed {
        if let Some(profile) = store.profile_path() {
            info!("Profile updated: {}", profile.display());
        }
    }
    println!("{}", describe_outcome(name, removed, inherited));
    Ok(())
}

fn describe_outcome(name: &str, removed: bool, inherited: bool) -> String {
    match (removed, inherited) {
        (true, _) => format!(
            "✅ Environment variable '{}' removed.\nOpen a new shell (or run 'unset {}') for it to disappear.",
            name, name
        ),
        (false, true) => format!(
            "⚠️  '{}' is inherited from the parent environment and is not in the profile; nothing was removed. Run 'unset {}' in your shell.",
            name, name
        ),
        (false, false) => format!("Environment variable '{}' was not set.", name),
    }
}
