//! # toolrs Credential Stores
//!
//! File: cli/src/core/credentials.rs
//!
//! ## Overview
//!
//! Commands that need secrets (the chat-completion API key) or that manage
//! persisted variables (`toolrs env set|unset`) go through the
//! `CredentialStore` trait defined here. Nothing outside this module reads the
//! process environment or shell profile files for credentials.
//!
//! ## Architecture
//!
//! - `EnvCredentialStore`: reads the process environment. Writes are kept in an
//!   in-memory overlay so they are visible for the rest of the current run
//!   without mutating the real environment.
//! - `ProfileCredentialStore`: a shell-profile style text file holding
//!   `export NAME='value'` lines.
//! - `LayeredCredentialStore`: environment first, then the profile. Writes go to
//!   both, so a freshly entered key works immediately and survives the run.
//!
//! The concrete store is chosen once by `core::context::AppContext`.
//!
use crate::core::error::{Result, ToolrsError};
use anyhow::{anyhow, Context};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Key/value access to named credentials.
pub trait CredentialStore {
    /// Returns the value for `name`, if set and non-empty.
    fn get(&self, name: &str) -> Option<String>;

    /// Stores `value` under `name`. `Ok(false)` means the value could not be persisted.
    fn set(&mut self, name: &str, value: &str) -> Result<bool>;

    /// Removes `name`. `Ok(false)` means there was nothing to remove.
    fn remove(&mut self, name: &str) -> Result<bool>;

    /// Whether `name` is visible only because the parent process exported it.
    fn is_inherited(&self, _name: &str) -> bool {
        false
    }
}

/// Process-environment backed store.
#[derive(Debug, Default)]
pub struct EnvCredentialStore {
    // `None` marks a name removed during this run.
    overlay: HashMap<String, Option<String>>,
}

impl EnvCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for EnvCredentialStore {
    fn get(&self, name: &str) -> Option<String> {
        match self.overlay.get(name) {
            Some(value) => value.clone(),
            None => std::env::var(name).ok().filter(|v| !v.is_empty()),
        }
    }

    fn set(&mut self, name: &str, value: &str) -> Result<bool> {
        self.overlay
            .insert(name.to_string(), Some(value.to_string()));
        Ok(true)
    }

    fn remove(&mut self, name: &str) -> Result<bool> {
        let existed = self.get(name).is_some();
        self.overlay.insert(name.to_string(), None);
        Ok(existed)
    }

    fn is_inherited(&self, name: &str) -> bool {
        !self.overlay.contains_key(name) && std::env::var_os(name).is_some_and(|v| !v.is_empty())
    }
}

/// Candidate profile files, in lookup order, relative to the home directory.
const PROFILE_CANDIDATES: [&str; 3] = [".zshrc", ".bashrc", ".bash_profile"];

/// Shell-profile backed store (`export NAME='value'` lines).
#[derive(Debug, Clone)]
pub struct ProfileCredentialStore {
    path: PathBuf,
}

impl ProfileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// First existing profile file under `home`, if any.
    pub fn discover(home: &Path) -> Option<Self> {
        PROFILE_CANDIDATES
            .iter()
            .map(|name| home.join(name))
            .find(|candidate| candidate.is_file())
            .map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read profile file: {}", self.path.display()))
    }

    fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write profile file: {}", self.path.display()))
    }
}

impl CredentialStore for ProfileCredentialStore {
    fn get(&self, name: &str) -> Option<String> {
        let content = self.read().ok()?;
        // Later exports shadow earlier ones, as they would when sourced.
        content
            .lines()
            .filter_map(|line| parse_export_line(line, name))
            .last()
            .filter(|v| !v.is_empty())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<bool> {
        validate_name(name)?;
        validate_value(name, value)?;
        let content = self.read()?;
        let export = format_export_line(name, value);

        let mut replaced = false;
        let mut lines: Vec<String> = Vec::new();
        for line in content.lines() {
            if parse_export_line(line, name).is_some() {
                if !replaced {
                    lines.push(export.clone());
                    replaced = true;
                }
            } else {
                lines.push(line.to_string());
            }
        }
        if !replaced {
            lines.push(export);
        }

        let mut updated = lines.join("\n");
        updated.push('\n');
        self.write(&updated)?;
        info!("Saved '{}' to {}", name, self.path.display());
        Ok(true)
    }

    fn remove(&mut self, name: &str) -> Result<bool> {
        let content = self.read()?;
        let kept: Vec<&str> = content
            .lines()
            .filter(|line| parse_export_line(line, name).is_none())
            .collect();
        if kept.len() == content.lines().count() {
            debug!("'{}' not present in {}", name, self.path.display());
            return Ok(false);
        }

        let mut updated = kept.join("\n");
        if !updated.is_empty() {
            updated.push('\n');
        }
        self.write(&updated)?;
        info!("Removed '{}' from {}", name, self.path.display());
        Ok(true)
    }
}

/// Environment first, then the optional profile file.
#[derive(Debug)]
pub struct LayeredCredentialStore {
    env: EnvCredentialStore,
    profile: Option<ProfileCredentialStore>,
}

impl LayeredCredentialStore {
    pub fn new(env: EnvCredentialStore, profile: Option<ProfileCredentialStore>) -> Self {
        Self { env, profile }
    }

    /// Profile file backing the store, used by commands to tell the user what to `source`.
    pub fn profile_path(&self) -> Option<&Path> {
        self.profile.as_ref().map(ProfileCredentialStore::path)
    }
}

impl CredentialStore for LayeredCredentialStore {
    fn get(&self, name: &str) -> Option<String> {
        self.env
            .get(name)
            .or_else(|| self.profile.as_ref().and_then(|p| p.get(name)))
    }

    fn set(&mut self, name: &str, value: &str) -> Result<bool> {
        self.env.set(name, value)?;
        match self.profile.as_mut() {
            Some(profile) => profile.set(name, value),
            None => {
                debug!("No profile file available; '{}' kept for this run only.", name);
                Ok(false)
            }
        }
    }

    /// `Ok(true)` only when the profile changed; hiding an inherited value
    /// for the rest of this run does not count.
    fn remove(&mut self, name: &str) -> Result<bool> {
        let inherited = self.env.is_inherited(name);
        self.env.remove(name)?;
        let from_profile = match self.profile.as_mut() {
            Some(profile) => profile.remove(name)?,
            None => false,
        };
        if inherited {
            debug!("'{}' is inherited from the parent environment.", name);
        }
        Ok(from_profile)
    }

    fn is_inherited(&self, name: &str) -> bool {
        self.env.is_inherited(name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(anyhow!(ToolrsError::Credential(format!(
            "'{}' is not a valid variable name.",
            name
        ))))
    }
}

/// Export lines are parsed one line at a time, so values must fit on one.
fn validate_value(name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(anyhow!(ToolrsError::Credential(format!(
            "The value for '{}' cannot contain line breaks.",
            name
        ))));
    }
    Ok(())
}

fn format_export_line(name: &str, value: &str) -> String {
    format!("export {}='{}'", name, value.replace('\'', r"'\''"))
}

/// Returns the value when `line` exports `name`.
fn parse_export_line(line: &str, name: &str) -> Option<String> {
    let rest = line.trim().strip_prefix("export")?;
    let rest = rest.trim_start().strip_prefix(name)?.strip_prefix('=')?;
    let value = rest.trim_end();
    let unquoted = if let Some(inner) = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        inner.replace(r"'\''", "'")
    } else if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        inner.to_string()
    } else {
        value.to_string()
    };
    Some(unquoted)
}
