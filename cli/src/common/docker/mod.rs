//! # toolrs Docker Module Interface
//!
//! File: cli/src/common/docker/mod.rs
//!
//! ## Overview
//!
//! This module is the interface toolrs uses to talk to Docker. It shells out to
//! the `docker` CLI through a `ProcessRunner` and parses its line-oriented,
//! pipe-delimited output.
//!
//! ## Architecture
//!
//! - **`state`**: Queries running containers (`docker ps`) and parses the rows.
//! - **`lifecycle`**: Stops containers (`docker stop`).
//!
//! ## Usage
//!
//! ```rust
//! # async fn run_example(ctx: &crate::core::context::AppContext) -> anyhow::Result<()> {
//! let docker = ctx.docker();
//! for row in docker.list_containers().await? {
//!     println!("{} {}", row.id, row.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::common::process::{CommandSpec, ProcessRunner};
use crate::core::error::Result;
use anyhow::Context;

/// Stops containers.
pub mod lifecycle;
/// Lists running containers and parses `docker ps` output.
pub mod state;

pub use state::ContainerRow;

const DOCKER: &str = "docker";

/// Thin client over the `docker` executable.
#[derive(Debug)]
pub struct DockerClient<R> {
    runner: R,
}

impl<R: ProcessRunner> DockerClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs `docker <args>`; the error message is the caller's summary of what failed.
    async fn run_checked<I, S>(&self, args: I, failure: &str) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = CommandSpec::new(DOCKER, args);
        self.runner
            .run(&spec)
            .await?
            .into_stdout(&spec)
            .context(failure.to_string())
    }
}
