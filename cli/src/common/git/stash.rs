//! # Stash Management (`common::git::stash`)
//!
//! File: cli/src/common/git/stash.rs
//!
//! Push, list, apply and drop stashes. `git stash list` prints the most recent
//! stash first, so position `0` in the returned list is always `stash@{0}`,
//! the stash pushed last.
//!
use super::GitClient;
use crate::{common::process::ProcessRunner, core::error::Result};
use tracing::info;

/// One line of `git stash list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashEntry {
    /// Position in the list; `stash@{index}`.
    pub index: usize,
    /// Human-readable descriptor, e.g. `stash@{0}: On main: wip`.
    pub descriptor: String,
}

impl StashEntry {
    pub fn reference(&self) -> String {
        stash_ref(self.index)
    }
}

fn stash_ref(index: usize) -> String {
    format!("stash@{{{}}}", index)
}

/// Parses `git stash list` output, preserving git's most-recent-first order.
pub fn parse_stash_list(output: &str) -> Vec<StashEntry> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| StashEntry {
            index,
            descriptor: line.to_string(),
        })
        .collect()
}

impl<R: ProcessRunner> GitClient<R> {
    /// `git stash push [-m <message>]`.
    pub async fn stash_push(&self, message: Option<&str>) -> Result<()> {
        let mut args = vec!["stash", "push"];
        if let Some(message) = message.filter(|m| !m.trim().is_empty()) {
            args.extend(["-m", message]);
        }
        self.run_checked(args).await?;
        info!("Stashed working tree changes");
        Ok(())
    }

    pub async fn list_stashes(&self) -> Result<Vec<StashEntry>> {
        let output = self.run_checked(["stash", "list"]).await?;
        Ok(parse_stash_list(&output))
    }

    pub async fn apply_stash(&self, index: usize) -> Result<()> {
        let reference = stash_ref(index);
        self.run_checked(["stash", "apply", reference.as_str()]).await?;
        info!("Applied {}", reference);
        Ok(())
    }

    pub async fn drop_stash(&self, index: usize) -> Result<()> {
        let reference = stash_ref(index);
        self.run_checked(["stash", "drop", reference.as_str()]).await?;
        info!("Dropped {}", reference);
        Ok(())
    }
}
