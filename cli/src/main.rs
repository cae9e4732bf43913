//! # toolrs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the main entry point for the toolrs CLI, a personal utility
//! belt for day-to-day development chores. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and assembling the `AppContext`
//! - Wiring Ctrl-C to the shared cancellation token
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - Each top-level command group (`ai`, `git`, ...) is a variant of `Commands`.
//! - Handlers receive `&AppContext` and return `core::error::Result`.
//! - All errors are propagated to this level, logged, printed as a single
//!   `Error: ...` line and turned into exit status 1.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! toolrs --help
//!
//! # Run a command with increased verbosity
//! toolrs -vv ai commit
//!
//! # Use a specific configuration file
//! toolrs --config ./toolrs.toml ai ask "What is a monad?"
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command groups (ai, git, docker, ...)
mod common; // Shared building blocks (process, git, ai, ui, ...)
mod core; // Core infrastructure (errors, config, context, credentials)

use crate::core::context::AppContext;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "toolrs",
    about = "🦀 toolrs 🧰: Personal CLI utility belt",
    long_about = "Everyday developer chores from one binary: AI answers and commit messages,\n\
                  git and docker shortcuts, zipping, environment variables and currency conversion.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read configuration from this file instead of the user and project files.
    #[arg(long, global = true, env = "TOOLRS_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Ask an AI model a question or generate a commit message.
    Ai(commands::ai::AiArgs),
    /// Git shortcuts.
    #[command(alias = "g")]
    Git(commands::git::GitArgs),
    /// Docker shortcuts.
    #[command(alias = "d")]
    Docker(commands::docker::DockerArgs),
    /// Zip a directory.
    #[command(alias = "z")]
    Zip(commands::zip::ZipArgs),
    /// Manage persistent environment variables.
    #[command(alias = "e")]
    Env(commands::env::EnvArgs),
    /// Convert between currencies.
    #[command(alias = "fx")]
    Currency(commands::currency::CurrencyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> core::error::Result<()> {
    let config = core::config::load_config(cli.config.as_deref())?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, cancelling...");
            on_signal.cancel();
        }
    });

    let ctx = AppContext::new(config, cancel);
    match cli.command {
        Commands::Ai(args) => commands::ai::handle_ai(args, &ctx).await,
        Commands::Git(args) => commands::git::handle_git(args, &ctx).await,
        Commands::Docker(args) => commands::docker::handle_docker(args, &ctx).await,
        Commands::Zip(args) => commands::zip::handle_zip(args, &ctx).await,
        Commands::Env(args) => commands::env::handle_env(args, &ctx).await,
        Commands::Currency(args) => commands::currency::handle_currency(args, &ctx).await,
    }
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["toolrs", "git", "revert", "-vv", "--config", "x.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Git(_)));
    }

    #[test]
    fn test_cli_aliases() {
        for (alias, expected) in [("g", "git"), ("d", "docker"), ("z", "zip"), ("fx", "currency")] {
            let argv: Vec<&str> = match expected {
                "git" => vec!["toolrs", alias, "revert"],
                "docker" => vec!["toolrs", alias, "list"],
                "zip" => vec!["toolrs", alias, "all"],
                _ => vec!["toolrs", alias, "convert"],
            };
            assert!(Cli::try_parse_from(argv).is_ok(), "alias {} failed", alias);
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["toolrs"]).is_err());
    }
}
