//! # toolrs Zip All Handler
//!
//! File: cli/src/commands/zip/all.rs
//!
//! ## Overview
//!
//! Implements `toolrs zip all`. The source directory defaults to the current
//! directory and the archive to `<dir>/<dirname>.zip`. Packing runs on the
//! blocking thread pool since it is plain filesystem I/O.
//!
use crate::{
    common::archive::zip::{default_archive_path, zip_directory},
    core::{context::AppContext, error::Result},
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Zip all files in a directory")]
pub struct AllArgs {
    /// Directory to archive. Defaults to the current directory.
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Archive path. Defaults to `<DIR>/<dirname>.zip`.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub async fn handle_all(args: AllArgs, _ctx: &AppContext) -> Result<()> {
    let (source, dest) = resolve_paths(args)?;
    info!("Zipping {} into {}", source.display(), dest.display());

    let archive = dest.clone();
    let count = tokio::task::spawn_blocking(move || zip_directory(&source, &archive))
        .await
        .context("Zip task failed to complete")??;

    println!("✅ Zipped {} file(s) into {}", count, dest.display());
    Ok(())
}

fn resolve_paths(args: AllArgs) -> Result<(PathBuf, PathBuf)> {
    let source = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine the current directory")?,
    };
    // Canonical so that `.` still yields a usable directory name.
    let source = source
        .canonicalize()
        .with_context(|| format!("Directory not found: {}", source.display()))?;
    let dest = match args.output {
        Some(output) => output,
        None => default_archive_path(&source)?,
    };
    Ok((source, dest))
}
