//! # toolrs ZIP Archive Operations (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//!
//! ## Overview
//!
//! Creates a Deflate-compressed ZIP archive from the contents of a directory.
//! Entry names are the file paths relative to the source directory, joined
//! with `/` on every platform. Hidden files are included. The destination file
//! may live inside the source directory; it is never added to itself.
//!
//! ## Architecture
//!
//! - `walkdir` performs the recursive traversal, sorted by file name so the
//!   entry order is stable.
//! - The `zip` crate writes the archive; file contents are streamed into it.
//! - Only regular files become entries. Directories are implied by the entry
//!   paths and symlinks are skipped.
//!
use crate::core::error::{Result, ToolrsError};
use anyhow::{anyhow, Context};
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Default archive location for `source`: `<source>/<basename>.zip`.
pub fn default_archive_path(source: &Path) -> Result<PathBuf> {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            anyhow!(ToolrsError::Archive(format!(
                "Cannot derive an archive name from '{}'",
                source.display()
            )))
        })?;
    Ok(source.join(format!("{}.zip", name)))
}

/// # Zip a Directory (`zip_directory`)
///
/// Writes every regular file below `source` into a new archive at `dest`,
/// replacing any existing file there.
///
/// ## Returns
///
/// The number of file entries written.
///
/// ## Errors
///
/// - `source` is not a directory.
/// - The archive cannot be created, or a file cannot be read while packing.
pub fn zip_directory(source: &Path, dest: &Path) -> Result<usize> {
    if !source.is_dir() {
        return Err(anyhow!(ToolrsError::Archive(format!(
            "'{}' is not a directory",
            source.display()
        ))));
    }

    let file = File::create(dest)
        .with_context(|| format!("Failed to create archive '{}'", dest.display()))?;
    // Canonical path of the archive itself, so the walk can skip it.
    let dest_canonical = dest
        .canonicalize()
        .with_context(|| format!("Failed to resolve archive path '{}'", dest.display()))?;

    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut count = 0usize;

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to read directory contents of '{}'", source.display())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.canonicalize().ok().as_deref() == Some(dest_canonical.as_path()) {
            debug!("Skipping the archive itself: {}", path.display());
            continue;
        }

        let name = entry_name(source, path)?;
        writer
            .start_file(name.as_str(), options)
            .with_context(|| format!("Failed to add '{}' to the archive", name))?;
        let mut input = BufReader::new(
            File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?,
        );
        io::copy(&mut input, &mut writer)
            .with_context(|| format!("Failed to write '{}' into the archive", name))?;
        debug!("Added {}", name);
        count += 1;
    }

    writer
        .finish()
        .with_context(|| format!("Failed to finalize archive '{}'", dest.display()))?;
    info!("Wrote {} file(s) to {}", count, dest.display());
    Ok(count)
}

/// Relative, `/`-separated entry name for `path` under `root`.
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        anyhow!(ToolrsError::Archive(format!(
            "'{}' is outside '{}'",
            path.display(),
            root.display()
        )))
    })?;
    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::BTreeSet, fs, io::Read};
    use tempfile::tempdir;

    fn entry_names(archive: &Path) -> BTreeSet<String> {
        let file = File::open(archive).unwrap();
        let zip = zip::ZipArchive::new(file).unwrap();
        zip.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_zip_directory_with_archive_inside_source() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("project");
        fs::create_dir_all(root.join("src/nested"))?;
        fs::write(root.join("README.md"), "readme")?;
        fs::write(root.join(".env"), "SECRET=1")?;
        fs::write(root.join("src/main.rs"), "fn main() {}")?;
        fs::write(root.join("src/nested/lib.rs"), "")?;

        let dest = default_archive_path(&root)?;
        assert_eq!(dest, root.join("project.zip"));

        let count = zip_directory(&root, &dest)?;
        assert_eq!(count, 4);
        let names = entry_names(&dest);
        let expected: BTreeSet<String> = [".env", "README.md", "src/main.rs", "src/nested/lib.rs"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, expected);
        Ok(())
    }

    #[test]
    fn test_zip_contents_round_trip() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "hello zip")?;
        let dest = dir.path().join("out.zip");
        zip_directory(dir.path(), &dest)?;

        let mut zip = zip::ZipArchive::new(File::open(&dest)?)?;
        let mut body = String::new();
        zip.by_name("a.txt")?.read_to_string(&mut body)?;
        assert_eq!(body, "hello zip");
        Ok(())
    }

    #[test]
    fn test_zip_empty_directory() -> Result<()> {
        let src = tempdir()?;
        let out = tempdir()?;
        let dest = out.path().join("empty.zip");
        assert_eq!(zip_directory(src.path(), &dest)?, 0);
        assert!(entry_names(&dest).is_empty());
        Ok(())
    }

    #[test]
    fn test_zip_rejects_non_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let err = zip_directory(&file, &dir.path().join("x.zip")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ToolrsError>(),
            Some(ToolrsError::Archive(_))
        ));
    }
}
