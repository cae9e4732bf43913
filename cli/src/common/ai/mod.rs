//! # toolrs Remote Completion Module (`common::ai`)
//!
//! File: cli/src/common/ai/mod.rs
//!
//! ## Overview
//!
//! Everything toolrs needs to talk to an OpenAI-compatible chat-completion
//! endpoint: request construction, the HTTP client, response parsing and the
//! clean-up applied to generated text before it is shown or committed.
//!
//! ## Architecture
//!
//! - **`request`**: `CompletionRequest`, `ChatMessage`, the fixed system prompts
//!   per `Purpose`, and the commit prompt builder.
//! - **`response`**: `CompletionResponse` and `parse_body`, which maps the raw
//!   body onto the `AiError` taxonomy.
//! - **`client`**: the `CompletionClient` trait and its `reqwest` implementation,
//!   `OpenAiClient`, with timeout, cancellation and a progress reporter.
//! - **`normalize`**: pure text clean-up for model output.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ai::{client::{CompletionClient, OpenAiClient}, request::{CompletionRequest, Purpose}};
//!
//! # async fn run(http: reqwest::Client, key: &str) -> anyhow::Result<()> {
//! let client = OpenAiClient::new(http, "https://api.openai.com/v1/chat/completions");
//! let request = CompletionRequest::new(Purpose::Ask, "What is the brazilian capital?");
//! let response = client.complete(key, &request).await?;
//! println!("{}", response.first_text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
use thiserror::Error;

pub mod client;
pub mod normalize;
pub mod request;
pub mod response;

/// Name of the credential holding the API key.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Default model used when neither the command line nor the config picks one.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Fallback message when the endpoint reports an error without one.
pub const UNKNOWN_ERROR: &str = "Unknown API error";

/// Failures of a single completion round trip.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AiError {
    /// The request never produced a response (connection, TLS, DNS...).
    #[error("API request failed: {0}")]
    Request(String),

    /// The endpoint answered with an `error` object.
    #[error("OpenAI API error: {0}")]
    Api(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The response carried no choices.
    #[error("No response content received from OpenAI.")]
    EmptyResponse,

    #[error("API request timed out after {0}s")]
    Timeout(u64),

    #[error("API request cancelled")]
    Cancelled,
}
