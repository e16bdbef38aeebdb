//! Batch cover processing.
//!
//! Runs each scanned file through its format adapter, one file at a time, and
//! turns whatever happens into exactly one [`FileStatus`]. Nothing that goes
//! wrong inside a single file stops the batch.
//!
//! ## Counting
//!
//! The summary mirrors the final status line `Results: X successful, Y failed`:
//!
//! | Status | Counted as |
//! |---|---|
//! | `Success` | successful |
//! | `NoCover` | failed |
//! | `Failed` | failed |
//! | `Unsupported` | not counted |
//!
//! Progress is delivered through a callback after every file so the caller
//! can print status lines while the batch is still running.

use crate::format::{self, AudioFormat, Route};
use crate::imaging::CoverTransform;
use crate::scan::ScanResult;
use crate::tags::{self, Outcome};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Terminal state of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Cover resized and file saved.
    Success,
    /// Readable, but no picture to resize. File untouched.
    NoCover,
    /// Extension has no adapter. File untouched.
    Unsupported,
    /// Parse, transform, or save failure. File untouched unless the save
    /// itself failed midway.
    Failed { reason: String },
}

/// Status of one file, plus what is needed to print it.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<AudioFormat>,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileReport {
    pub fn unsupported(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            format: None,
            status: FileStatus::Unsupported,
        }
    }

    /// Final path component, as shown in status lines.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Results of a whole run.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub success: usize,
    pub failed: usize,
    pub reports: Vec<FileReport>,
}

impl BatchSummary {
    fn record(&mut self, report: FileReport) {
        match report.status {
            FileStatus::Success => self.success += 1,
            FileStatus::NoCover | FileStatus::Failed { .. } => self.failed += 1,
            FileStatus::Unsupported => {}
        }
        self.reports.push(report);
    }
}

/// Route one file to its adapter and settle its status.
pub fn process_file(path: &Path, transform: &CoverTransform<'_>) -> FileReport {
    let format = match format::route(path) {
        Route::Supported(format) => format,
        Route::Unsupported => return FileReport::unsupported(path),
    };

    let status = match tags::adapter_for(format).process(path, transform) {
        Ok(Outcome::Modified) => FileStatus::Success,
        Ok(Outcome::NoCover) => FileStatus::NoCover,
        Err(err) => {
            tracing::debug!(path = %path.display(), %format, error = %err, "cover rewrite failed");
            FileStatus::Failed {
                reason: err.to_string(),
            }
        }
    };

    FileReport {
        path: path.to_path_buf(),
        format: Some(format),
        status,
    }
}

/// Process `files` in order, calling `on_report` after each one.
pub fn process_files<I, P>(
    files: I,
    transform: &CoverTransform<'_>,
    mut on_report: impl FnMut(&FileReport),
) -> BatchSummary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summary = BatchSummary::default();
    for path in files {
        let report = process_file(path.as_ref(), transform);
        on_report(&report);
        summary.record(report);
    }
    summary
}

/// Report the scan's unsupported inputs, then process its files.
pub fn process_scan(
    scan: &ScanResult,
    transform: &CoverTransform<'_>,
    mut on_report: impl FnMut(&FileReport),
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for path in &scan.unsupported {
        let report = FileReport::unsupported(path);
        on_report(&report);
        summary.record(report);
    }

    let processed = process_files(&scan.files, transform, &mut on_report);
    summary.success += processed.success;
    summary.failed += processed.failed;
    summary.reports.extend(processed.reports);
    summary
}
