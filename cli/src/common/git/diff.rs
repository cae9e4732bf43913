//! # Diff Resolution (`common::git::diff`)
//!
//! File: cli/src/common/git/diff.rs
//!
//! Picks the diff a commit message should describe: the staged diff when there
//! is one, otherwise the full working-tree diff. When both are blank the caller
//! gets `DiffOutcome::NoChanges` rather than an empty string, so it can stop
//! before contacting the completion endpoint.
//!
use super::GitClient;
use crate::{common::process::ProcessRunner, core::error::Result};
use tracing::debug;

/// Which diff was found, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Output of `git diff --staged`.
    Staged(String),
    /// Output of `git diff` (nothing was staged).
    WorkingTree(String),
    NoChanges,
}

impl DiffOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            DiffOutcome::Staged(text) | DiffOutcome::WorkingTree(text) => Some(text),
            DiffOutcome::NoChanges => None,
        }
    }
}

impl<R: ProcessRunner> GitClient<R> {
    pub async fn resolve_diff(&self) -> Result<DiffOutcome> {
        let staged = self.run_checked(["diff", "--staged"]).await?;
        if !staged.trim().is_empty() {
            debug!("Using staged diff ({} bytes)", staged.len());
            return Ok(DiffOutcome::Staged(staged));
        }

        let working = self.run_checked(["diff"]).await?;
        if !working.trim().is_empty() {
            debug!("Using working-tree diff ({} bytes)", working.len());
            return Ok(DiffOutcome::WorkingTree(working));
        }

        Ok(DiffOutcome::NoChanges)
    }
}
