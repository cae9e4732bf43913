//! # toolrs Env Set Handler
//!
//! File: cli/src/commands/env/set.rs
//!
//! Implements `toolrs env set [NAME] [VALUE]`. An existing export of the same
//! name is replaced in place; otherwise a new line is appended.
//!
use super::required_value;
use crate::core::{
    context::AppContext,
    credentials::CredentialStore,
    error::Result,
};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(about = "Set a persistent environment variable")]
pub struct SetArgs {
    /// Variable name. Prompted for when omitted.
    name: Option<String>,
    /// Variable value. Prompted for when omitted.
    value: Option<String>,
}

pub fn handle_set(args: SetArgs, ctx: &AppContext) -> Result<()> {
    let name = required_value(args.name, "Enter the variable name", "Variable name")?;
    let value = required_value(args.value, "Enter the variable value", "Variable value")?;
    let name = name.trim();
    info!("Setting environment variable '{}'", name);

    let mut store = ctx.credentials();
    let persisted = store.set(name, &value)?;
    println!("{}", describe_outcome(name, persisted, store.profile_path()));
    if !persisted {
        warn!("No shell profile found; '{}' was not persisted.", name);
    }
    Ok(())
}

fn describe_outcome(name: &str, persisted: bool, profile: Option<&Path>) -> String {
    match (persisted, profile) {
        (true, Some(profile)) => format!(
            "✅ Environment variable '{}' set in {}.\nRun 'source {}' to load it into the current shell.",
            name,
            profile.display(),
            profile.display()
        ),
        _ => format!(
            "⚠️  No shell profile found; '{}' was not persisted. Set [credentials] profile_path in the config.",
            name
        ),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_args_are_optional() {
        let args = SetArgs::try_parse_from(["set"]).unwrap();
        assert!(args.name.is_none() && args.value.is_none());
        let args = SetArgs::try_parse_from(["set", "API_TOKEN", "abc def"]).unwrap();
        assert_eq!(args.value.as_deref(), Some("abc def"));
    }

    #[test]
    fn test_describe_outcome() {
        let done = describe_outcome("A", true, Some(Path::new("/home/u/.bashrc")));
        assert!(done.contains("source /home/u/.bashrc"));
        assert!(describe_outcome("A", false, None).contains("not persisted"));
    }
}
