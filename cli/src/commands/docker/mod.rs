//! # toolrs Docker Command Group
//!
//! File: cli/src/commands/docker/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `toolrs docker`. Both subcommands shell out to
//! the `docker` CLI through `common::docker::DockerClient`:
//!
//! - `list`: running containers as a table (`#`, ID, Name, Image, Ports).
//! - `stop-all`: stops every running container after a confirmation.
//!
//! ## Examples
//!
//! ```bash
//! toolrs docker list
//! toolrs docker stop-all --yes
//! ```
//!
use crate::core::{context::AppContext, error::Result};
use clap::{Parser, Subcommand};

/// Implements `toolrs docker list`.
mod list;
/// Implements `toolrs docker stop-all`.
mod stop_all;

/// # Docker Command Group Arguments (`DockerArgs`)
#[derive(Parser, Debug)]
pub struct DockerArgs {
    #[command(subcommand)]
    command: DockerCommand,
}

#[derive(Subcommand, Debug)]
enum DockerCommand {
    /// List running containers.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Stop all running containers.
    StopAll(stop_all::StopAllArgs),
}

pub async fn handle_docker(args: DockerArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        DockerCommand::List(args) => list::handle_list(args, ctx).await?,
        DockerCommand::StopAll(args) => stop_all::handle_stop_all(args, ctx).await?,
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_docker_subcommands() {
        let args = DockerArgs::try_parse_from(["docker", "ls"]).unwrap();
        assert!(matches!(args.command, DockerCommand::List(_)));
        let args = DockerArgs::try_parse_from(["docker", "stop-all", "-y"]).unwrap();
        assert!(matches!(args.command, DockerCommand::StopAll(_)));
    }
}
