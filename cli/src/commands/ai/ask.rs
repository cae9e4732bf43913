//! # toolrs AI Ask Handler
//!
//! File: cli/src/commands/ai/ask.rs
//!
//! ## Overview
//!
//! Implements `toolrs ai ask`: sends one prompt with the terminal-assistant
//! system message and prints the normalized answer.
//!
//! ## Usage
//!
//! ```bash
//! toolrs ai ask "What is the brazilian capital?"
//! toolrs ai ask --model gpt-4o-mini --max-tokens 200 explain git rebase
//! toolrs ai ask            # prompts for the question
//! ```
//!
use super::{
    build_request, completion_client, prompt_for_api_key, render_usage, reset_key,
    resolve_api_key, RequestOptions,
};
use crate::{
    common::{
        ai::{client::CompletionClient, normalize::normalize, request::Purpose, AiError},
        ui::prompt,
    },
    core::{context::AppContext, error::Result},
};
use clap::Parser;
use tracing::{debug, info};

const ENTER_PROMPT: &str = "Please type your request and press Enter";
const DEFAULT_PROMPT: &str = "What is the brazilian capital?";

#[derive(Parser, Debug)]
#[command(about = "Uses AI to respond to a prompt or question")]
pub struct AskArgs {
    /// The question to ask. Prompted for interactively when omitted.
    prompt: Vec<String>,

    #[command(flatten)]
    options: RequestOptions,
}

pub async fn handle_ask(args: AskArgs, ctx: &AppContext) -> Result<()> {
    info!("Handling ai ask command...");
    debug!("Ask args: {:?}", args);

    let mut store = ctx.credentials();
    if args.options.reset {
        return reset_key::reset(&mut store);
    }
    let api_key = resolve_api_key(&mut store, prompt_for_api_key)?;

    let question = args.prompt.join(" ");
    let question = if question.trim().is_empty() {
        prompt::ask(ENTER_PROMPT, Some(DEFAULT_PROMPT))?
    } else {
        question
    };

    let request = build_request(Purpose::Ask, question, &args.options, &ctx.config);
    let client = completion_client(ctx)?;
    let response = client.complete(&api_key, &request).await?;

    if let Some(usage) = &response.usage {
        print!("{}", render_usage(&request, usage));
    }

    let answers: Vec<String> = response
        .choices
        .iter()
        .map(|choice| normalize(choice.text()))
        .filter(|text| !text.is_empty())
        .collect();
    if answers.is_empty() {
        return Err(AiError::EmptyResponse.into());
    }

    println!("\nResponse\n--------");
    for answer in answers {
        println!("{}", answer);
    }
    Ok(())
}
