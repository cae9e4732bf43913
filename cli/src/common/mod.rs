//! # toolrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers. Nothing here parses
//! command-line arguments; everything here returns results upward and leaves
//! presentation to `commands::*`, with the exception of `ui`, which holds the
//! presentation helpers themselves.
//!
//! ## Architecture
//!
//! - **`ai`**: chat-completion requests, the HTTP client, response parsing and text normalization.
//! - **`archive`**: ZIP creation for `toolrs zip`.
//! - **`docker`**: `docker` CLI wrappers (list and stop containers).
//! - **`git`**: `git` CLI wrappers (diff, stage, commit/push, stash, revert).
//! - **`network`**: shared HTTP client and the currency rate lookup.
//! - **`process`**: the external process invoker everything above shells out through.
//! - **`ui`**: progress spinner, prompts and tables.
//!

/// Remote chat-completion client and output clean-up.
pub mod ai;
/// Archive creation (ZIP).
pub mod archive;
/// Docker CLI helpers.
pub mod docker;
/// Git CLI helpers.
pub mod git;
/// HTTP client construction and currency rates.
pub mod network;
/// External process execution.
pub mod process;
/// Terminal interaction: progress, prompts, tables.
pub mod ui;
