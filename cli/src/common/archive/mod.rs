//! # toolrs Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Archive helpers used by `toolrs zip`. Only ZIP output is supported.
//!
//! ## Architecture
//!
//! - **`zip`**: Recursively packs a directory into a `.zip` file, storing entries
//!   relative to the directory root and skipping the archive being written.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive;
//! use std::path::Path;
//!
//! # fn run() -> anyhow::Result<()> {
//! let count = archive::zip::zip_directory(Path::new("./project"), Path::new("./project/project.zip"))?;
//! println!("{} files archived", count);
//! # Ok(())
//! # }
//! ```
//!

pub mod zip;
