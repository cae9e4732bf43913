//! # toolrs Git Utilities Module (`common::git`)
//!
//! File: cli/src/common/git/mod.rs
//!
//! ## Overview
//!
//! This module wraps the `git` binary for the commands that need it
//! (`toolrs ai commit`, `toolrs git ...`). Every operation is a fixed argument
//! vector handed to a `ProcessRunner`; output is parsed as line-oriented text.
//!
//! ## Architecture
//!
//! - **`GitClient`** (this file): owns the runner and an optional repository
//!   directory, and provides availability checks plus the simple
//!   stage/unstage/soft-revert calls.
//! - **`diff`**: staged-then-working-tree diff resolution (`DiffOutcome`).
//! - **`commit`**: the add → commit → push sequence (`GitStep`).
//! - **`stash`**: push/list/apply/drop of stashes by position index.
//!
//! No method prompts or prints. Failures come back as `ToolrsError` values;
//! "nothing to do" outcomes (no diff, no stashes) are ordinary return values.
//!
use crate::{
    common::process::{CommandSpec, ProcessRunner},
    core::error::{Result, ToolrsError},
};
use anyhow::anyhow;
use std::path::PathBuf;
use tracing::info;

mod commit;
mod diff;
mod stash;

pub use commit::GitStep;
pub use diff::DiffOutcome;
pub use stash::StashEntry;

const GIT: &str = "git";

/// Thin client over the `git` executable.
#[derive(Debug)]
pub struct GitClient<R> {
    runner: R,
    repo_dir: Option<PathBuf>,
}

impl<R: ProcessRunner> GitClient<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            repo_dir: None,
        }
    }

    /// Runs every git call inside `dir` instead of the current directory.
    #[cfg(test)]
    pub fn in_repo(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repo_dir = Some(dir.into());
        self
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub(crate) fn spec<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = CommandSpec::new(GIT, args);
        match &self.repo_dir {
            Some(dir) => spec.in_dir(dir.clone()),
            None => spec,
        }
    }

    /// Runs `git <args>` and returns stdout, failing with `ProcessFailed` on non-zero exit.
    pub(crate) async fn run_checked<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = self.spec(args);
        self.runner.run(&spec).await?.into_stdout(&spec)
    }

    pub async fn is_available(&self) -> bool {
        self.runner.is_available(GIT).await
    }

    /// Fails with `DependencyUnavailable` when git cannot be run.
    pub async fn ensure_available(&self) -> Result<()> {
        if self.is_available().await {
            Ok(())
        } else {
            Err(anyhow!(ToolrsError::DependencyUnavailable(GIT.to_string())))
        }
    }

    /// `git add <path>`; defaults to every path.
    pub async fn stage(&self, path: Option<&str>) -> Result<()> {
        let target = path.unwrap_or(".");
        self.run_checked(["add", target]).await?;
        info!("Staged '{}'", target);
        Ok(())
    }

    /// `git reset <path>`; defaults to every path.
    pub async fn unstage(&self, path: Option<&str>) -> Result<()> {
        let target = path.unwrap_or(".");
        self.run_checked(["reset", target]).await?;
        info!("Unstaged '{}'", target);
        Ok(())
    }

    /// Undoes the last commit while keeping its changes staged.
    pub async fn soft_revert(&self) -> Result<()> {
        self.run_checked(["reset", "--soft", "HEAD~1"]).await?;
        info!("Soft-reverted HEAD");
        Ok(())
    }
}
