//! # toolrs Docker Stop-All Handler
//!
//! File: cli/src/commands/docker/stop_all.rs
//!
//! ## Overview
//!
//! Implements `toolrs docker stop-all`. Collects the ids of running
//! containers (`docker ps -q`), asks for confirmation unless `--yes` is given,
//! then stops them all with one `docker stop` call and prints the ids that
//! were stopped.
//!
use crate::{
    common::ui::prompt,
    core::{context::AppContext, error::Result},
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Stop all running Docker containers")]
pub struct StopAllArgs {
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

pub async fn handle_stop_all(args: StopAllArgs, ctx: &AppContext) -> Result<()> {
    info!("Handling docker stop-all command...");
    let docker = ctx.docker();
    let ids = docker.running_ids().await?;
    if ids.is_empty() {
        println!("No running containers to stop.");
        return Ok(());
    }

    println!("{} running container(s): {}", ids.len(), ids.join(" "));
    if !args.yes && !prompt::confirm("Do you want to stop all containers?", true)? {
        println!("Action canceled by user.");
        return Ok(());
    }

    let stopped = docker.stop(&ids).await?;
    println!("✅ Stopped containers:");
    for id in &stopped {
        println!("  {}", id);
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_all_yes_flag() {
        assert!(StopAllArgs::try_parse_from(["stop-all", "--yes"]).unwrap().yes);
        assert!(!StopAllArgs::try_parse_from(["stop-all"]).unwrap().yes);
    }
}
