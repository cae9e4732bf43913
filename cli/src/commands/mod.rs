//! # toolrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level command groups of the toolrs CLI and
//! makes them accessible to the entry point (`main.rs`).
//!
//! ## Architecture
//!
//! - Top-level modules are command groups (e.g., `ai`, `git`).
//! - Each group declares its subcommands in its own `mod.rs` and exposes
//!   `XArgs` plus a `handle_x(args, &AppContext)` dispatcher.
//!
//! ## Command Groups
//!
//! - `ai`: Chat-completion questions and commit messages
//! - `currency`: Currency conversion
//! - `docker`: Container listing and bulk stop
//! - `env`: Persistent environment variables
//! - `git`: Stash, revert, stage and unstage shortcuts
//! - `zip`: Directory archiving
//!

/// Ask questions and generate commit messages. Subcommands `ask`, `commit`, `reset-key`.
pub mod ai;
/// Convert amounts between currencies. Subcommand `convert`.
pub mod currency;
/// Docker helpers. Subcommands `list`, `stop-all`.
pub mod docker;
/// Persistent environment variables. Subcommands `set`, `unset`.
pub mod env;
/// Git shortcuts. Subcommands `stash`, `stash-restore`, `revert`, `stage`, `unstage`.
pub mod git;
/// Directory archiving. Subcommand `all`.
pub mod zip;
