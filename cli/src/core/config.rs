//! # toolrs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for toolrs, handling loading,
//! merging, validation, and access to configuration data. It combines defaults,
//! user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` / `TOOLRS_CONFIG` (replaces 2 and 3)
//! 2. Project-specific `.toolrs.toml` in the current directory or ancestors (stops at the git root)
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [ai]
//! model = "gpt-4o-mini"
//! max_tokens = 400
//! timeout_secs = 60
//!
//! [process]
//! timeout_secs = 120
//!
//! [credentials]
//! profile_path = "~/.zshrc"
//! ```
//!
//! The configuration is loaded once per command execution in `main.rs` and
//! handed to the command handlers through `core::context::AppContext`.
//!
use crate::{
    common::ai,
    core::error::{Result, ToolrsError},
};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use toml::{Table, Value};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub process: ProcessConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
}

/// Settings for the chat-completion commands (`toolrs ai ...`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AiConfig {
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on generated tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Chat-completion endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_ai_timeout")]
    pub timeout_secs: u64,
    /// Commit message language used without prompting when set.
    #[serde(default)]
    pub language: Option<String>,
}

/// Settings for the external process invoker.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProcessConfig {
    /// Per-invocation timeout in seconds. `0` (default) waits indefinitely.
    #[serde(default)]
    pub timeout_secs: u64,
}

/// Where persisted credentials live.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CredentialsConfig {
    /// Shell profile holding `export NAME='value'` lines (can use ~).
    /// When unset the first existing of `~/.zshrc`, `~/.bashrc`, `~/.bash_profile` is used.
    pub profile_path: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CurrencyConfig {
    /// Base URL of the currency rate API; `<code>.json` is appended.
    #[serde(default = "default_currency_api_base")]
    pub api_base: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            api_url: default_api_url(),
            timeout_secs: default_ai_timeout(),
            language: None,
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            api_base: default_currency_api_base(),
        }
    }
}

impl AiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        seconds_to_timeout(self.timeout_secs)
    }
}

impl ProcessConfig {
    pub fn timeout(&self) -> Option<Duration> {
        seconds_to_timeout(self.timeout_secs)
    }
}

fn seconds_to_timeout(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn default_model() -> String {
    ai::DEFAULT_MODEL.to_string()
}
fn default_max_tokens() -> u32 {
    ai::request::DEFAULT_MAX_TOKENS
}
fn default_temperature() -> f32 {
    ai::request::DEFAULT_TEMPERATURE
}
fn default_api_url() -> String {
    ai::DEFAULT_API_URL.to_string()
}
fn default_ai_timeout() -> u64 {
    120
}
fn default_currency_api_base() -> String {
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".toolrs.toml";

/// Loads, merges, expands and validates the configuration.
///
/// When `explicit` is given only that file is read (on top of the defaults).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            into_config(read_config_table(path)?, path)?
        }
        None => {
            let mut merged = Table::new();
            if let Some((path, user)) = load_user_config()? {
                into_config(user.clone(), &path)?;
                merge_tables(&mut merged, user);
            }
            if let Some((path, project)) = load_project_config()? {
                into_config(project.clone(), &path)?;
                merge_tables(&mut merged, project);
            }
            merged
                .try_into()
                .context("Failed to combine user and project configuration")?
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<(PathBuf, Table)>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "toolrs", "toolrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            let table = read_config_table(&config_path)?;
            Ok(Some((config_path, table)))
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<(PathBuf, Table)>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            let table = read_config_table(&path)?;
            Ok(Some((path, table)))
        }
        None => {
            debug!("No project configuration file (.toolrs.toml) found.");
            Ok(None)
        }
    }
}

/// Walks from `start` towards the filesystem root looking for `.toolrs.toml`,
/// stopping at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn read_config_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Checks a single file's table against the schema so errors name that file.
fn into_config(table: Table, path: &Path) -> Result<Config> {
    table
        .try_into()
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Overlays `overlay` onto `base` key by key. Keys written in `overlay` win,
/// including ones set back to their default; sections merge recursively.
fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(section)) => {
                merge_tables(existing, section)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(profile) = config.credentials.profile_path.as_mut() {
        *profile = shellexpand::tilde(profile).into_owned();
        debug!("Expanded credential profile path: {}", profile);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.ai.model.trim().is_empty() {
        return Err(anyhow!(ToolrsError::Config(
            "ai.model cannot be empty.".to_string()
        )));
    }
    if config.ai.max_tokens == 0 {
        return Err(anyhow!(ToolrsError::Config(
            "ai.max_tokens must be a positive integer.".to_string()
        )));
    }
    if !(0.0..=2.0).contains(&config.ai.temperature) {
        return Err(anyhow!(ToolrsError::Config(format!(
            "ai.temperature must be between 0.0 and 2.0 (got {}).",
            config.ai.temperature
        ))));
    }
    if let Some(language) = &config.ai.language {
        language
            .parse::<ai::request::Language>()
            .map_err(|e| anyhow!(ToolrsError::Config(format!("ai.language: {}", e))))?;
    }
    for (key, url) in [
        ("ai.api_url", &config.ai.api_url),
        ("currency.api_base", &config.currency.api_base),
    ] {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(anyhow!(ToolrsError::Config(format!(
                "{} must be an http(s) URL (got '{}').",
                key, url
            ))));
        }
    }
    Ok(())
}
