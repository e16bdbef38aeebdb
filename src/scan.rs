//! Input path expansion.
//!
//! Turns the command-line path list into the set of audio files to process.
//!
//! ## Rules
//!
//! - Surrounding double quotes are stripped from each input, since paths
//!   dropped onto a terminal or launcher often arrive quoted.
//! - A file input with a supported extension is collected. Any other file
//!   input is recorded in [`ScanResult::unsupported`] so it can be reported.
//! - A directory input is walked recursively. Only files with a supported
//!   extension are collected; everything else in the tree is skipped silently.
//! - An input that does not exist is recorded in [`ScanResult::missing`].
//! - Collected files are keyed by absolute, normalized path in a `BTreeSet`,
//!   so a file named twice (directly and through its folder) is processed
//!   once, and processing order does not depend on argument order.
//!
//! Symlinked files inside a walked directory are collected like regular
//! files. An entry that cannot be read (a subdirectory without permission, a
//! symlink loop) is skipped with a warning and the walk goes on. Only a root
//! that cannot be read at all aborts the scan with [`ScanError::Walk`].

use crate::config::ScanConfig;
use crate::format;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Files discovered by [`scan`].
#[derive(Debug, Default, Serialize)]
pub struct ScanResult {
    /// Supported audio files, absolute and deduplicated.
    pub files: BTreeSet<PathBuf>,
    /// Explicitly named files whose extension has no adapter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unsupported: Vec<PathBuf>,
    /// Inputs that do not exist.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<PathBuf>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Expand `inputs` into the audio files to process.
pub fn scan(inputs: &[PathBuf], options: &ScanConfig) -> Result<ScanResult, ScanError> {
    let mut result = ScanResult::default();

    for input in inputs {
        let path = strip_quotes(input);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "input path does not exist");
            result.missing.push(path);
        } else if path.is_dir() {
            let root = fs::canonicalize(&path)?;
            walk_directory(&root, options, &mut result.files)?;
        } else if format::is_supported(&path) {
            result.files.insert(fs::canonicalize(&path)?);
        } else {
            tracing::debug!(path = %path.display(), "explicit input has unsupported extension");
            result.unsupported.push(path);
        }
    }

    tracing::debug!(
        files = result.files.len(),
        unsupported = result.unsupported.len(),
        missing = result.missing.len(),
        "scan complete"
    );
    Ok(result)
}

fn walk_directory(
    root: &Path,
    options: &ScanConfig,
    files: &mut BTreeSet<PathBuf>,
) -> Result<(), ScanError> {
    for entry in WalkDir::new(root).follow_links(options.follow_symlinks) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.path().is_file() && format::is_supported(entry.path()) {
            files.insert(entry.into_path());
        }
    }
    Ok(())
}

/// Remove one layer of surrounding `"` from a path given as text.
fn strip_quotes(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) if text.starts_with('"') || text.ends_with('"') => {
            PathBuf::from(text.trim_matches('"'))
        }
        _ => path.to_path_buf(),
    }
}
