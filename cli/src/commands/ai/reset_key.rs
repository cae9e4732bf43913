//! # toolrs AI Reset Key Handler
//!
//! File: cli/src/commands/ai/reset_key.rs
//!
//! Implements `toolrs ai reset-key` (also reachable as `--reset` on `ask` and
//! `commit`): removes `OPENAI_API_KEY` from the credential store so the next
//! request prompts for a new key.
//!
use crate::{
    common::ai::OPENAI_API_KEY,
    core::{context::AppContext, credentials::CredentialStore, error::Result},
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Remove the stored OpenAI API key")]
pub struct ResetKeyArgs {}

pub fn handle_reset_key(_args: ResetKeyArgs, ctx: &AppContext) -> Result<()> {
    let mut store = ctx.credentials();
    reset(&mut store)
}

pub(super) fn reset<S: CredentialStore + ?Sized>(store: &mut S) -> Result<()> {
    info!("Resetting {}", OPENAI_API_KEY);
    let inherited = store.is_inherited(OPENAI_API_KEY);
    if store.remove(OPENAI_API_KEY)? {
        println!("✅ {} removed.", OPENAI_API_KEY);
    } else if !inherited {
        println!("{} was not set; nothing to remove.", OPENAI_API_KEY);
    }
    if inherited {
        println!(
            "⚠️  {} is also exported by your shell and stays set until you run 'unset {}'.",
            OPENAI_API_KEY, OPENAI_API_KEY
        );
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::ProfileCredentialStore;
    use tempfile::tempdir;

    #[test]
    fn test_reset_removes_key_from_profile() {
        let dir = tempdir().unwrap();
        let profile = dir.path().join(".bashrc");
        std::fs::write(&profile, "alias ll='ls -l'\nexport OPENAI_API_KEY='sk-old'\n").unwrap();
        let mut store = ProfileCredentialStore::new(&profile);

        reset(&mut store).unwrap();
        assert!(store.get(OPENAI_API_KEY).is_none());
        assert_eq!(std::fs::read_to_string(&profile).unwrap(), "alias ll='ls -l'\n");
    }

    /// Reports inherited values and empty profiles separately from removals.
    struct InheritedOnly {
        removed: bool,
    }

    impl CredentialStore for InheritedOnly {
        fn get(&self, _name: &str) -> Option<String> {
            Some("sk-env".to_string())
        }
        fn set(&mut self, _name: &str, _value: &str) -> Result<bool> {
            Ok(true)
        }
        fn remove(&mut self, _name: &str) -> Result<bool> {
            self.removed = true;
            Ok(false)
        }
        fn is_inherited(&self, _name: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_reset_of_inherited_key_succeeds_without_persisting() {
        let mut store = InheritedOnly { removed: false };
        reset(&mut store).unwrap();
        assert!(store.removed);
    }

    #[test]
    fn test_reset_args_take_no_arguments() {
        assert!(ResetKeyArgs::try_parse_from(["reset-key"]).is_ok());
        assert!(ResetKeyArgs::try_parse_from(["reset-key", "extra"]).is_err());
    }
}
