//! # Commit and Push (`common::git::commit`)
//!
//! File: cli/src/common/git/commit.rs
//!
//! Stages everything, commits with a given message, and pushes. The three
//! invocations run strictly in order and the sequence stops at the first
//! failure, which is reported as `ToolrsError::GitStep` naming the step.
//!
use super::GitClient;
use crate::{
    common::process::ProcessRunner,
    core::error::{Result, ToolrsError},
};
use anyhow::anyhow;
use std::fmt;
use tracing::{error, info};

/// One step of the commit-and-push sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    Add,
    Commit,
    Push,
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GitStep::Add => "add",
            GitStep::Commit => "commit",
            GitStep::Push => "push",
        };
        f.write_str(name)
    }
}

impl<R: ProcessRunner> GitClient<R> {
    /// `git add .`, `git commit -m <message>`, `git push`.
    ///
    /// Returns the combined stdout of the steps for display.
    pub async fn commit_and_push(&self, message: &str) -> Result<String> {
        let steps: [(GitStep, Vec<&str>); 3] = [
            (GitStep::Add, vec!["add", "."]),
            (GitStep::Commit, vec!["commit", "-m", message]),
            (GitStep::Push, vec!["push"]),
        ];

        let mut transcript = String::new();
        for (step, args) in steps {
            let spec = self.spec(args);
            let result = self.runner.run(&spec).await?;
            if !result.success {
                error!("git {} failed: {}", step, result.failure_text());
                return Err(anyhow!(ToolrsError::GitStep {
                    step,
                    stderr: result.failure_text(),
                }));
            }
            info!("git {} succeeded", step);
            // git push reports progress on stderr.
            for text in [&result.stdout, &result.stderr] {
                if !text.trim().is_empty() {
                    transcript.push_str(text.trim_end());
                    transcript.push('\n');
                }
            }
        }
        Ok(transcript)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::process::fake::ScriptedRunner;

    #[tokio::test]
    async fn test_runs_three_steps_in_order() {
        let git = GitClient::new(
            ScriptedRunner::new()
                .ok("")
                .ok("[main abc123] feat: add x\n")
                .ok(""),
        );
        let transcript = git.commit_and_push("feat: add x").await.unwrap();
        assert!(transcript.contains("feat: add x"));
        assert_eq!(
            git.runner().calls(),
            vec![
                vec!["git", "add", "."],
                vec!["git", "commit", "-m", "feat: add x"],
                vec!["git", "push"],
            ]
        );
    }

    #[tokio::test]
    async fn test_commit_failure_never_pushes() {
        let git = GitClient::new(
            ScriptedRunner::new()
                .ok("")
                .fail("nothing to commit, working tree clean"),
        );
        let err = git.commit_and_push("chore: noop").await.unwrap_err();

        match err.downcast_ref::<ToolrsError>() {
            Some(ToolrsError::GitStep { step, stderr }) => {
                assert_eq!(*step, GitStep::Commit);
                assert!(stderr.contains("nothing to commit"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        let calls = git.runner().calls();
        assert_eq!(calls.len(), 2);
        assert!(!calls.iter().any(|c| c.contains(&"push".to_string())));
    }

    #[tokio::test]
    async fn test_add_failure_stops_immediately() {
        let git = GitClient::new(ScriptedRunner::new().fail("fatal: pathspec"));
        let err = git.commit_and_push("x").await.unwrap_err();
        assert!(err.to_string().starts_with("git add failed"));
        assert_eq!(git.runner().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_push_failure_identifies_push() {
        let git = GitClient::new(ScriptedRunner::new().ok("").ok("").fail("rejected"));
        let err = git.commit_and_push("x").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ToolrsError>(),
            Some(ToolrsError::GitStep {
                step: GitStep::Push,
                ..
            })
        ));
    }
}
