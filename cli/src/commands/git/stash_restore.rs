//! # toolrs Git Stash Restore Handler
//!
//! File: cli/src/commands/git/stash_restore.rs
//!
//! ## Overview
//!
//! Implements `toolrs git stash-restore`. Shows the five most recent stashes
//! as `[index] descriptor`, asks which one to apply (unless `--index` is
//! given), runs `git stash apply stash@{index}` and, with `--drop`, removes
//! the stash afterwards. Having no stashes is not an error.
//!
//! ## Usage
//!
//! ```bash
//! toolrs git stash-restore
//! toolrs git stash-restore --index 2 --drop
//! ```
//!
use crate::{
    common::{git::StashEntry, ui::prompt},
    core::{
        context::AppContext,
        error::{Result, ToolrsError},
    },
};
use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::{debug, info};

/// How many stashes are listed before asking.
const SHOWN_STASHES: usize = 5;

const SELECT_PROMPT: &str = "Enter the number of the stash to apply";

#[derive(Parser, Debug)]
#[command(about = "Apply one of the most recent stashes")]
pub struct StashRestoreArgs {
    /// Stash position to apply (0 is the most recent). Prompted for when omitted.
    #[arg(short, long)]
    index: Option<usize>,

    /// Drop the stash after applying it.
    #[arg(short, long)]
    drop: bool,
}

pub async fn handle_stash_restore(args: StashRestoreArgs, ctx: &AppContext) -> Result<()> {
    info!("Handling git stash-restore command...");
    let git = ctx.git();
    git.ensure_available().await?;

    let stashes = git.list_stashes().await?;
    if stashes.is_empty() {
        println!("⚠️  No stashes found.");
        return Ok(());
    }

    print!("{}", render_recent(&stashes));
    let index = match args.index {
        Some(index) => index,
        None => prompt_for_index(stashes.len())?,
    };
    let entry = select(&stashes, index)?;
    debug!("Selected {}", entry.reference());

    git.apply_stash(entry.index)
        .await
        .context("Failed to apply stash")?;
    println!("✅ Successfully applied stash: {}", entry.descriptor);

    if args.drop {
        git.drop_stash(entry.index)
            .await
            .context("Failed to drop stash")?;
        println!("Dropped {}", entry.reference());
    }
    Ok(())
}

/// Listing of the most recent stashes, one `[index] descriptor` per line.
fn render_recent(stashes: &[StashEntry]) -> String {
    let mut out = format!("Last {} Stashes\n", SHOWN_STASHES);
    for entry in stashes.iter().take(SHOWN_STASHES) {
        out.push_str(&format!("[{}] {}\n", entry.index, entry.descriptor));
    }
    if stashes.len() > SHOWN_STASHES {
        out.push_str(&format!(
            "Note: {} older stash(es) not shown; any index can still be used.\n",
            stashes.len() - SHOWN_STASHES
        ));
    }
    out
}

fn select(stashes: &[StashEntry], index: usize) -> Result<&StashEntry> {
    stashes.iter().find(|entry| entry.index == index).ok_or_else(|| {
        anyhow!(ToolrsError::InvalidInput(format!(
            "Invalid stash selection: {} (there are {} stashes).",
            index,
            stashes.len()
        )))
    })
}

fn prompt_for_index(count: usize) -> Result<usize> {
    loop {
        let answer = prompt::ask(SELECT_PROMPT, None)?;
        match answer.parse::<usize>() {
            Ok(index) if index < count => return Ok(index),
            _ => eprintln!("Invalid selection. Please enter a valid stash number."),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::git::StashEntry;

    fn entries(count: usize) -> Vec<StashEntry> {
        (0..count)
            .map(|index| StashEntry {
                index,
                descriptor: format!("stash@{{{}}}: On main: change {}", index, index),
            })
            .collect()
    }

    #[test]
    fn test_render_recent_limits_to_five() {
        let rendered = render_recent(&entries(7));
        assert!(rendered.contains("[0] stash@{0}: On main: change 0"));
        assert!(rendered.contains("[4] stash@{4}"));
        assert!(!rendered.contains("[5]"));
        assert!(rendered.contains("2 older stash(es)"));
    }

    #[test]
    fn test_select_validates_index() {
        let stashes = entries(2);
        assert_eq!(select(&stashes, 1).unwrap().index, 1);
        let err = select(&stashes, 2).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ToolrsError>(),
            Some(ToolrsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_stash_restore_args() {
        let args = StashRestoreArgs::try_parse_from(["stash-restore", "-i", "3", "--drop"]).unwrap();
        assert_eq!(args.index, Some(3));
        assert!(args.drop);
    }
}
