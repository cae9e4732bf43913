//! # toolrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that every
//! command relies on.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `context`: Assembly of per-run collaborators (runner, stores, clients)
//! - `credentials`: The credential-store abstraction and its implementations
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::context::AppContext; // Handed to every command handler
//! use crate::core::error::{Result, ToolrsError}; // For error handling
//! ```
//!
pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
