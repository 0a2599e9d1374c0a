//! Core scanning library for Trojan Source / confusable-character detection.
//!
//! Design points:
//! - Danger lists and the classifier are immutable, built once at process
//!   start; every scan derives its output fresh from the input text.
//! - The boolean path (CI gating) short-circuits; the detailed path locates
//!   every suspicious character with line/column/snippet.
//! - The legacy `has_trojan_source*` pair checks only the narrow bidi set
//!   and stays semantically distinct from the `has_confusables*` superset.
//! - The driver swallows per-file read errors: unreadable input contributes
//!   nothing and never aborts a batch.

mod classify;
mod engine;
mod findings;
mod lists;
mod options;
mod scan;

pub use classify::{
    category_label, character_name, classify, is_control_char, is_format_char, is_suspicious,
    Category, ALLOWED_CONTROL_CHARS,
};
pub use findings::{code_point_hex, FileReport, Finding, SNIPPET_MAX_CHARS};
pub use lists::{confusable_set, trojan_source_set, DangerSet, DANGEROUS_BIDI_CHARS,
    EXPLICIT_CONFUSABLES};
pub use options::ScanOptions;
pub use scan::{scan_files, trojan_source_files};

use std::path::Path;

/// Boolean check: does `text` contain any confusable character?
pub fn has_confusables(text: &str) -> bool {
    engine::scan_boolean(text)
}

/// Detailed check: every suspicious character in `text`, in document order.
pub fn has_confusables_detailed(text: &str) -> Vec<Finding> {
    engine::scan_detailed(text)
}

/// Per-file boolean check. Flagged files only, input order, `findings`
/// absent.
pub fn has_confusables_in_files<P: AsRef<Path>>(paths: &[P]) -> Vec<FileReport> {
    scan::scan_files(paths, &ScanOptions::default())
}

/// Per-file detailed check. Files with findings only, input order.
pub fn has_confusables_in_files_detailed<P: AsRef<Path>>(paths: &[P]) -> Vec<FileReport> {
    let opts = ScanOptions { detailed: true, ..Default::default() };
    scan::scan_files(paths, &opts)
}

/// Legacy alias: bidi-control check only (strictly narrower than
/// [`has_confusables`]).
pub fn has_trojan_source(text: &str) -> bool {
    engine::scan_trojan_source(text)
}

/// Legacy alias: per-file bidi-control check.
pub fn has_trojan_source_in_files<P: AsRef<Path>>(paths: &[P]) -> Vec<FileReport> {
    scan::trojan_source_files(paths)
}
