//! # Completion Requests (`common::ai::request`)
//!
//! File: cli/src/common/ai/request.rs
//!
//! A `CompletionRequest` always carries exactly two messages: the system
//! message fixed by its `Purpose`, followed by the user's prompt. The fields
//! are private so that shape cannot be broken after construction.
//!
use serde::Serialize;
use std::{fmt, str::FromStr};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 600;

const SYSTEM_ROLE_ASK: &str = "You are a console assistent. the user will ask you questions and you will answer them. Take in consideration that the output will be used in a terminal";

const SYSTEM_ROLE_COMMIT: &str = "You are an expert in generating commit messages following the Conventional Commits standard. Always respond only with the commit message, in the format: <type>(<optional scope>): <imperative summary up to 50 characters>, and, if necessary, an optional body separated by a blank line. Do not include any other information";

const COMMIT_PROMPT: &str = "using {language} language, write a plain text for a concise semantic conventional commit based on the following diff:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// What the request is for; selects the system message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    /// General terminal assistant.
    Ask,
    /// Conventional Commits message generator.
    Commit,
}

impl Purpose {
    pub fn system_prompt(self) -> &'static str {
        match self {
            Purpose::Ask => SYSTEM_ROLE_ASK,
            Purpose::Commit => SYSTEM_ROLE_COMMIT,
        }
    }
}

/// Body of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(purpose: Purpose, prompt: impl Into<String>) -> Self {
        Self {
            model: super::DEFAULT_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: purpose.system_prompt().to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: prompt.into(),
                },
            ],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Zero is ignored; the endpoint rejects it.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        if max_tokens > 0 {
            self.max_tokens = max_tokens;
        }
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

/// Languages offered for generated commit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Portuguese,
    French,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Portuguese,
        Language::French,
        Language::Spanish,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Portuguese",
            Language::French => "French",
            Language::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "unknown language '{}' (expected one of: {})",
                    wanted,
                    Language::ALL.map(Language::name).join(", ")
                )
            })
    }
}

/// User prompt asking for a commit message in `language` describing `diff`.
pub fn commit_prompt(language: Language, diff: &str) -> String {
    format!(
        "{}\n{}",
        COMMIT_PROMPT.replace("{language}", language.name()),
        diff
    )
}
