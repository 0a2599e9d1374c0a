//! Glob expansion for `--files` patterns.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).with_context(|| format!("invalid glob: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("build glob set")
}

/// Expand glob patterns against `root`, collecting matching files. Sorted
/// for a reproducible scan order; unreadable directory entries are skipped.
pub fn expand_globs(patterns: &[String], root: &Path) -> Result<Vec<PathBuf>> {
    let set = build_glob_set(patterns)?;
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        // Match on the path relative to the walk root so `*.js` works at the
        // top level.
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if set.is_match(relative) {
            files.push(relative.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
