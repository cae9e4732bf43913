//! # toolrs Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! This module runs external programs (`git`, `docker`) with a fixed argument
//! list and captures their output. It is the only place in toolrs that spawns
//! child processes.
//!
//! ## Architecture
//!
//! - **`CommandSpec`**: immutable description of one invocation (program, args,
//!   optional working directory).
//! - **`ExecutionResult`**: captured stdout/stderr plus a success flag that is
//!   true exactly when the child exited with status zero. Output is captured
//!   whatever the exit status.
//! - **`ProcessRunner`**: the async trait the git and docker helpers are generic
//!   over, so their call sequences can be exercised with a scripted runner.
//! - **`SystemRunner`**: the real implementation on top of `tokio::process`.
//!   Each invocation races the child against an optional timeout and a
//!   `CancellationToken`; the losing child is killed (`kill_on_drop`).
//!
//! A program that cannot be started is not an `Err`: the runner returns a
//! failed `ExecutionResult` whose stderr explains why, so callers report it
//! the same way as a non-zero exit. `Err` is reserved for timeout, cancellation
//! and I/O failures while collecting output.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process::{CommandSpec, ProcessRunner, SystemRunner};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let runner = SystemRunner::default();
//! let result = runner.run(&CommandSpec::new("git", ["status", "--short"])).await?;
//! if result.success {
//!     println!("{}", result.stdout);
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, ToolrsError};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use std::{
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Runs the program from `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Human-readable command line, used in logs and error messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured outcome of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    /// Exit code, when the process exited normally.
    pub code: Option<i32>,
}

impl ExecutionResult {
    pub fn from_output(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }

    /// Result for a program that could not be started at all.
    pub fn spawn_failure(spec: &CommandSpec, error: &std::io::Error) -> Self {
        let reason = if error.kind() == std::io::ErrorKind::NotFound {
            format!("'{}' was not found in PATH", spec.program())
        } else {
            format!("failed to start '{}': {}", spec.program(), error)
        };
        Self {
            stderr: reason,
            ..Self::default()
        }
    }

    /// Converts a failed result into `ToolrsError::ProcessFailed`, keeping stdout on success.
    pub fn into_stdout(self, spec: &CommandSpec) -> Result<String> {
        if self.success {
            return Ok(self.stdout);
        }
        Err(anyhow!(ToolrsError::ProcessFailed {
            cmd: spec.display(),
            status: self
                .code
                .map_or_else(|| "not started".to_string(), |c| c.to_string()),
            stderr: self.failure_text(),
        }))
    }

    /// Most useful text to show when the process failed.
    pub fn failure_text(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Something that can execute a `CommandSpec`.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, spec: &CommandSpec) -> Result<ExecutionResult>;

    /// True when `<program> --version` runs and exits successfully.
    async fn is_available(&self, program: &str) -> bool {
        match self.run(&CommandSpec::new(program, ["--version"])).await {
            Ok(result) => result.success,
            Err(e) => {
                debug!("Availability check for '{}' failed: {}", program, e);
                false
            }
        }
    }
}

/// Runs programs on the host through `tokio::process`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
    cancel: CancellationToken,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>, cancel: CancellationToken) -> Self {
        Self { timeout, cancel }
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<ExecutionResult> {
        debug!("Executing: {}", spec.display());
        let mut command = tokio::process::Command::new(spec.program());
        command
            .args(spec.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = spec.cwd() {
            command.current_dir(dir);
        }

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("Could not start '{}': {}", spec.program(), e);
                return Ok(ExecutionResult::spawn_failure(spec, &e));
            }
        };

        let limit = self.timeout;
        let deadline = async move {
            match limit {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };

        // Dropping `child` in the losing branches kills it.
        tokio::select! {
            output = child.wait_with_output() => {
                let output = output
                    .with_context(|| format!("Failed to collect output of '{}'", spec.display()))?;
                let result = ExecutionResult::from_output(output);
                debug!("'{}' exited with {:?}", spec.display(), result.code);
                Ok(result)
            }
            _ = deadline => Err(anyhow!(ToolrsError::Timeout {
                operation: spec.display(),
                seconds: limit.map_or(0, |l| l.as_secs()),
            })),
            _ = self.cancel.cancelled() => Err(anyhow!(ToolrsError::Cancelled {
                operation: spec.display(),
            })),
        }
    }
}
