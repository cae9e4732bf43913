//! # toolrs AI Commit Handler
//!
//! File: cli/src/commands/ai/commit.rs
//!
//! ## Overview
//!
//! Implements `toolrs ai commit`: asks the completion endpoint for a
//! Conventional Commits message describing the current changes, shows it, and
//! on confirmation runs `git add .`, `git commit -m <message>` and `git push`.
//!
//! ## Architecture
//!
//! 1. Check that `git` is available.
//! 2. Resolve the diff (staged first, then working tree). With no changes the
//!    command stops here, exits successfully and never contacts the endpoint.
//! 3. Resolve the API key and the message language (`--language`, then
//!    `ai.language` from the config, then an interactive choice).
//! 4. Request, normalize and print the message.
//! 5. Confirm (`--yes` skips the question, default is no) and commit/push.
//!    A failing step stops the sequence and is reported by name.
//!
//! ## Usage
//!
//! ```bash
//! toolrs ai commit
//! toolrs ai commit --language Spanish --yes
//! ```
//!
use super::{
    build_request, completion_client, prompt_for_api_key, render_usage, reset_key,
    resolve_api_key, RequestOptions,
};
use crate::{
    common::{
        ai::{
            client::CompletionClient,
            normalize::normalize,
            request::{commit_prompt, Language, Purpose},
            AiError,
        },
        git::DiffOutcome,
        ui::prompt,
    },
    core::{config::Config, context::AppContext, error::Result},
};
use clap::Parser;
use tracing::{debug, info};

const NO_CHANGES: &str = "No changes detected to generate a commit message.";
const LANGUAGE_QUESTION: &str = "In which language do you want to make the commit?";
const COMMIT_CONFIRM: &str = "Stage changes, commit with this message and push?";
const COMMIT_SUCCESS: &str = "Changes staged, committed, and pushed successfully.";
const ACTION_CANCELED: &str = "Action canceled by user.";

#[derive(Parser, Debug)]
#[command(about = "Uses AI to generate a git commit message based on the current diff")]
pub struct CommitArgs {
    /// Language of the commit message (English, Portuguese, French, Spanish).
    #[arg(short, long)]
    language: Option<Language>,

    /// Commit and push without asking for confirmation.
    #[arg(short, long)]
    yes: bool,

    #[command(flatten)]
    options: RequestOptions,
}

pub async fn handle_commit(args: CommitArgs, ctx: &AppContext) -> Result<()> {
    info!("Handling ai commit command...");
    debug!("Commit args: {:?}", args);

    let mut store = ctx.credentials();
    if args.options.reset {
        return reset_key::reset(&mut store);
    }

    let git = ctx.git();
    git.ensure_available().await?;

    let diff = match git.resolve_diff().await? {
        DiffOutcome::NoChanges => {
            println!("⚠️  {}", NO_CHANGES);
            return Ok(());
        }
        outcome => outcome,
    };
    let diff_text = diff.text().unwrap_or_default();
    debug!("Resolved diff: {:?} bytes", diff_text.len());

    let api_key = resolve_api_key(&mut store, prompt_for_api_key)?;
    let language = select_language(args.language, &ctx.config)?;
    println!("Selected language: {}", language);

    let request = build_request(
        Purpose::Commit,
        commit_prompt(language, diff_text),
        &args.options,
        &ctx.config,
    );
    let client = completion_client(ctx)?;
    let response = client.complete(&api_key, &request).await?;

    if let Some(usage) = &response.usage {
        print!("{}", render_usage(&request, usage));
    }

    let message = response.first_text().map(normalize).unwrap_or_default();
    if message.is_empty() {
        return Err(AiError::EmptyResponse.into());
    }

    println!("\nCommit message\n--------------");
    println!("{}\n", message);

    let confirmed = args.yes || prompt::confirm(COMMIT_CONFIRM, false)?;
    if !confirmed {
        println!("{}", ACTION_CANCELED);
        return Ok(());
    }

    let transcript = git.commit_and_push(&message).await?;
    if !transcript.trim().is_empty() {
        print!("{}", transcript);
    }
    println!("✅ {}", COMMIT_SUCCESS);
    Ok(())
}

/// `--language`, then the configured language, then an interactive choice.
fn select_language(explicit: Option<Language>, config: &Config) -> Result<Language> {
    if let Some(language) = explicit {
        return Ok(language);
    }
    if let Some(configured) = &config.ai.language {
        // Already validated when the config was loaded.
        if let Ok(language) = configured.parse::<Language>() {
            return Ok(language);
        }
    }
    let names = Language::ALL.map(Language::name);
    let index = prompt::choose(LANGUAGE_QUESTION, &names, 0)?;
    Ok(Language::ALL[index])
}
