//! # toolrs UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers shared by the command handlers. Only the
//! command layer (`commands::*`) uses them; the process, git, docker and AI
//! helpers never prompt or print.
//!
//! ## Architecture
//!
//! - **`progress`**: `ProgressReporter` trait with an `indicatif` spinner
//!   implementation and a no-op one for tests and non-interactive use.
//! - **`prompt`**: line prompts, confirmations and numbered choices read from
//!   stdin, with the answer parsing kept in pure functions.
//! - **`table`**: plain ASCII table rendering for listings.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui::{prompt, table};
//!
//! # fn run() -> anyhow::Result<()> {
//! if prompt::confirm("Do you want to stop all containers?", true)? {
//!     print!("{}", table::render_table(&["#", "ID"], &[vec!["1".into(), "a1b2".into()]]));
//! }
//! # Ok(())
//! # }
//! ```
//!

pub mod progress;
pub mod prompt;
pub mod table;
