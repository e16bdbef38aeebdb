//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Resize
//!
//! ```text
//! Found 3 audio files to process...
//! ✓ Success: 01 - Intro.flac
//! ⚠ No cover art found in: 02 - Interlude.mp3
//! ✖ Failed 03 - Outro.m4a: cannot decode picture: unexpected EOF
//!
//! Results: 1 successful, 2 failed
//! ```
//!
//! ## Scan
//!
//! ```text
//! Found 2 audio files to process...
//! 001 FLAC 01 - Intro.flac
//!     Source: /music/Album/01 - Intro.flac
//! 002 MP3 02 - Interlude.mp3
//!     Source: /music/Album/02 - Interlude.mp3
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::format::{self, Route};
use crate::process::{BatchSummary, FileReport, FileStatus};
use crate::scan::ScanResult;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Header printed before processing starts, plus one warning per missing input.
pub fn format_scan_header(scan: &ScanResult) -> Vec<String> {
    let mut lines: Vec<String> = scan
        .missing
        .iter()
        .map(|path| format!("⚠ Path not found: {}", path.display()))
        .collect();

    if scan.files.is_empty() {
        lines.push("No supported audio files found".to_string());
    } else {
        lines.push(format!(
            "Found {} audio files to process...",
            scan.files.len()
        ));
    }
    lines
}

/// One status line for a processed (or skipped) file.
pub fn format_file_report(report: &FileReport) -> String {
    let name = report.file_name();
    match &report.status {
        FileStatus::Success => format!("✓ Success: {name}"),
        FileStatus::NoCover => format!("⚠ No cover art found in: {name}"),
        FileStatus::Unsupported => format!("⚠ Unsupported format: {name}"),
        FileStatus::Failed { reason } => format!("✖ Failed {name}: {reason}"),
    }
}

/// Blank separator line, then the totals.
pub fn format_summary(summary: &BatchSummary) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "Results: {} successful, {} failed",
            summary.success, summary.failed
        ),
    ]
}

/// Listing for the `scan` command: each file with its detected format.
pub fn format_scan_listing(scan: &ScanResult) -> Vec<String> {
    let mut lines = format_scan_header(scan);

    for (i, path) in scan.files.iter().enumerate() {
        let format = match format::route(path) {
            Route::Supported(format) => format.name(),
            Route::Unsupported => "?",
        };
        lines.push(format!(
            "{} {} {}",
            format_index(i + 1),
            format,
            display_name(path)
        ));
        lines.push(format!("    Source: {}", path.display()));
    }

    for path in &scan.unsupported {
        lines.push(format!("⚠ Unsupported format: {}", display_name(path)));
    }
    lines
}

pub fn print_scan_header(scan: &ScanResult) {
    for line in format_scan_header(scan) {
        println!("{}", line);
    }
}

pub fn print_file_report(report: &FileReport) {
    println!("{}", format_file_report(report));
}

pub fn print_summary(summary: &BatchSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

pub fn print_scan_listing(scan: &ScanResult) {
    for line in format_scan_listing(scan) {
        println!("{}", line);
    }
}
