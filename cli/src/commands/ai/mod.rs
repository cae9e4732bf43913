//! # toolrs AI Command Group
//!
//! File: cli/src/commands/ai/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `toolrs ai`. The subcommands send a single
//! chat-completion request: `ask` answers a free-form question and `commit`
//! writes a Conventional Commits message for the current diff and can commit
//! and push it. `reset-key` forgets the stored API key.
//!
//! ## Architecture
//!
//! - `AiArgs` / `AiCommand`: clap definitions for the group.
//! - `handle_ai`: dispatches to the subcommand handlers.
//! - Shared helpers used by `ask` and `commit`:
//!   - `RequestOptions`: `--model`, `--max-tokens`, `--reset`.
//!   - `resolve_api_key`: reads `OPENAI_API_KEY` from the credential store,
//!     prompting for and saving it when missing.
//!   - `build_request`, `completion_client`, `render_usage`.
//!
//! ## Examples
//!
//! ```bash
//! toolrs ai ask "How do I list open ports on Linux?"
//! toolrs ai commit --language Portuguese
//! toolrs ai commit --yes --model gpt-4o-mini
//! toolrs ai reset-key
//! ```
//!
use crate::{
    common::{
        ai::{
            client::OpenAiClient,
            request::{CompletionRequest, Purpose},
            response::Usage,
            OPENAI_API_KEY,
        },
        ui::{progress::SpinnerProgress, prompt, table},
    },
    core::{
        config::Config,
        context::AppContext,
        credentials::CredentialStore,
        error::{Result, ToolrsError},
    },
};
use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use tracing::{debug, warn};

/// Implements `toolrs ai ask`.
mod ask;
/// Implements `toolrs ai commit`.
mod commit;
/// Implements `toolrs ai reset-key`.
mod reset_key;

const API_KEY_NOT_FOUND: &str = "OpenAI API key not found.";
const API_KEY_INSTRUCTIONS: &str = "Create your API key at https://platform.openai.com/api-keys.";
const API_KEY_CREATE: &str = "Type your OpenAI API key";

/// # AI Command Group Arguments (`AiArgs`)
#[derive(Parser, Debug)]
pub struct AiArgs {
    #[command(subcommand)]
    command: AiCommand,
}

#[derive(Subcommand, Debug)]
enum AiCommand {
    /// Send a prompt to the AI assistant and print the answer.
    #[command(alias = "a")]
    Ask(ask::AskArgs),
    /// Generate a commit message from the current diff, then optionally commit and push.
    #[command(alias = "c")]
    Commit(commit::CommitArgs),
    /// Remove the stored OpenAI API key.
    ResetKey(reset_key::ResetKeyArgs),
}

/// Options shared by the request-sending subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestOptions {
    /// Model to use (defaults to `ai.model` from the config, `gpt-4-turbo` otherwise).
    #[arg(short, long)]
    model: Option<String>,

    /// Maximum tokens to generate (defaults to `ai.max_tokens`, 600 otherwise).
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(1..))]
    max_tokens: Option<u32>,

    /// Remove the stored OpenAI API key and exit.
    #[arg(short, long)]
    reset: bool,
}

pub async fn handle_ai(args: AiArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        AiCommand::Ask(args) => ask::handle_ask(args, ctx).await?,
        AiCommand::Commit(args) => commit::handle_commit(args, ctx).await?,
        AiCommand::ResetKey(args) => reset_key::handle_reset_key(args, ctx)?,
    }
    Ok(())
}

/// Returns the stored API key, or obtains one from `ask_for_key` and saves it.
fn resolve_api_key<S, F>(store: &mut S, ask_for_key: F) -> Result<String>
where
    S: CredentialStore + ?Sized,
    F: FnOnce() -> Result<String>,
{
    if let Some(key) = store.get(OPENAI_API_KEY) {
        debug!("Using stored {}", OPENAI_API_KEY);
        return Ok(key);
    }

    let key = ask_for_key()?.trim().to_string();
    if key.is_empty() {
        return Err(anyhow!(ToolrsError::Credential(API_KEY_NOT_FOUND.to_string())));
    }
    if !store.set(OPENAI_API_KEY, &key)? {
        warn!(
            "{} could not be persisted; it will be requested again next time.",
            OPENAI_API_KEY
        );
    }
    Ok(key)
}

/// Interactive source for `resolve_api_key`.
fn prompt_for_api_key() -> Result<String> {
    eprintln!("❌ {}", API_KEY_NOT_FOUND);
    eprintln!("ℹ️  {}", API_KEY_INSTRUCTIONS);
    prompt::ask_secret(API_KEY_CREATE)
}

/// Command-line overrides first, then the configuration.
fn build_request(
    purpose: Purpose,
    prompt: String,
    options: &RequestOptions,
    config: &Config,
) -> CompletionRequest {
    CompletionRequest::new(purpose, prompt)
        .with_model(options.model.clone().unwrap_or_else(|| config.ai.model.clone()))
        .with_max_tokens(options.max_tokens.unwrap_or(config.ai.max_tokens))
        .with_temperature(config.ai.temperature)
}

fn completion_client(ctx: &AppContext) -> Result<OpenAiClient> {
    Ok(OpenAiClient::new(ctx.http_client()?, ctx.config.ai.api_url.clone())
        .with_timeout(ctx.config.ai.timeout())
        .with_cancel(ctx.cancel.clone())
        .with_progress(Arc::new(SpinnerProgress::new())))
}

/// Token usage table printed after a completion.
fn render_usage(request: &CompletionRequest, usage: &Usage) -> String {
    let rows = vec![
        vec!["Model".to_string(), request.model().to_string()],
        vec!["Max Tokens".to_string(), request.max_tokens().to_string()],
        vec!["Temperature".to_string(), request.temperature().to_string()],
        vec!["Prompt Tokens".to_string(), usage.prompt_tokens.to_string()],
        vec!["Completion Tokens".to_string(), usage.completion_tokens.to_string()],
        vec!["Total Tokens".to_string(), usage.total_tokens.to_string()],
    ];
    table::render_table(&["Type", "Tokens"], &rows)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::{EnvCredentialStore, ProfileCredentialStore};
    use tempfile::tempdir;

    #[test]
    fn test_parses_ai_subcommands() {
        let args = AiArgs::try_parse_from(["ai", "ask", "what", "is", "rust"]).unwrap();
        assert!(matches!(args.command, AiCommand::Ask(_)));

        let args = AiArgs::try_parse_from(["ai", "commit", "--yes", "-l", "french"]).unwrap();
        assert!(matches!(args.command, AiCommand::Commit(_)));

        let args = AiArgs::try_parse_from(["ai", "reset-key"]).unwrap();
        assert!(matches!(args.command, AiCommand::ResetKey(_)));
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        assert!(AiArgs::try_parse_from(["ai", "ask", "--max-tokens", "0", "hi"]).is_err());
    }

    #[test]
    fn test_build_request_prefers_cli_over_config() {
        let mut config = Config::default();
        config.ai.model = "from-config".to_string();
        config.ai.max_tokens = 300;

        let options = RequestOptions {
            model: Some("from-cli".to_string()),
            ..Default::default()
        };
        let request = build_request(Purpose::Ask, "hi".into(), &options, &config);
        assert_eq!(request.model(), "from-cli");
        assert_eq!(request.max_tokens(), 300);
    }

    #[test]
    fn test_resolve_api_key_uses_stored_key() {
        let dir = tempdir().unwrap();
        let profile = dir.path().join(".bashrc");
        std::fs::write(&profile, "export OPENAI_API_KEY='sk-stored'\n").unwrap();
        let mut store = ProfileCredentialStore::new(&profile);

        let key = resolve_api_key(&mut store, || panic!("should not prompt")).unwrap();
        assert_eq!(key, "sk-stored");
    }

    #[test]
    fn test_resolve_api_key_prompts_and_saves() {
        let dir = tempdir().unwrap();
        let profile = dir.path().join(".zshrc");
        let mut store = ProfileCredentialStore::new(&profile);

        let key = resolve_api_key(&mut store, || Ok("  sk-new \n".to_string())).unwrap();
        assert_eq!(key, "sk-new");
        assert_eq!(store.get(OPENAI_API_KEY).as_deref(), Some("sk-new"));
    }

    #[test]
    fn test_resolve_api_key_rejects_blank_answer() {
        let mut store = EnvCredentialStore::new();
        store.remove(OPENAI_API_KEY).unwrap();
        let err = resolve_api_key(&mut store, || Ok(String::new())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ToolrsError>(),
            Some(ToolrsError::Credential(_))
        ));
    }

    #[test]
    fn test_render_usage_rows() {
        let request = CompletionRequest::new(Purpose::Ask, "hi");
        let usage = Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        };
        let rendered = render_usage(&request, &usage);
        assert!(rendered.contains("| Model             | gpt-4-turbo |"));
        assert!(rendered.contains("| Total Tokens      | 15          |"));
        assert!(rendered.contains("| Temperature       | 0.7         |"));
    }
}
