//! # toolrs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types shared by the toolrs command helpers.
//! Lower layers (process invoker, git/docker helpers, archive writer, credential
//! stores) return these errors upward; only the command layer decides how to
//! present them to the user.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ToolrsError`: A custom error enum using `thiserror` for the specific failure kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible propagation and context
//!
//! The remote completion client keeps its own taxonomy (`common::ai::AiError`) so
//! transport, API, parse and empty-response failures stay distinguishable.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !git.is_available().await {
//!     return Err(ToolrsError::DependencyUnavailable("git".into()).into());
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<ToolrsError>(), Some(ToolrsError::GitStep { .. })) => { /* ... */ }
//!     other => other?,
//! }
//! ```
//!
use crate::common::git::GitStep;
use thiserror::Error;

/// Custom error type for the toolrs application.
#[derive(Error, Debug)]
pub enum ToolrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required external executable could not be found or started.
    #[error("'{0}' is not available on this system.")]
    DependencyUnavailable(String),

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{stderr}")]
    ProcessFailed {
        cmd: String,
        status: String,
        stderr: String,
    },

    /// One step of a multi-step git sequence failed; later steps were not run.
    #[error("git {step} failed: {stderr}")]
    GitStep { step: GitStep, stderr: String },

    #[error("Timed out after {seconds}s: {operation}")]
    Timeout { operation: String, seconds: u64 },

    #[error("Cancelled: {operation}")]
    Cancelled { operation: String },

    #[error("Credential store error: {0}")]
    Credential(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
