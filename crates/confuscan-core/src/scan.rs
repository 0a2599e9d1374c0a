//! File/batch driver.
//!
//! Per-file failures are swallowed by contract: a path that is missing,
//! unreadable or not valid UTF-8 contributes nothing to the output and
//! raises no error. Output order always matches input path order, including
//! on the parallel path, where results are re-stabilized by input index.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::engine::{scan_boolean, scan_detailed, scan_trojan_source};
use crate::findings::{FileReport, Finding};
use crate::options::ScanOptions;

/// Scan each readable file and aggregate non-empty results in input order.
///
/// Boolean mode emits `{file}` entries for flagged files; detailed mode
/// emits `{file, findings}` only when findings exist.
pub fn scan_files<P: AsRef<Path>>(paths: &[P], opts: &ScanOptions) -> Vec<FileReport> {
    run_driver(paths, opts, scan_one_confusables)
}

/// Legacy per-file driver over the bidi-only set. Boolean mode only.
pub fn trojan_source_files<P: AsRef<Path>>(paths: &[P]) -> Vec<FileReport> {
    let opts = ScanOptions::default();
    run_driver(paths, &opts, scan_one_trojan_source)
}

/// Per-file scan body: returns `Some(findings)` when the file should appear
/// in the aggregate (`None` inside means "flagged, boolean mode").
type FileScanFn = fn(&str, &ScanOptions) -> Option<Option<Vec<Finding>>>;

fn scan_one_confusables(text: &str, opts: &ScanOptions) -> Option<Option<Vec<Finding>>> {
    if opts.detailed {
        let findings = scan_detailed(text);
        if findings.is_empty() {
            None
        } else {
            Some(Some(findings))
        }
    } else {
        scan_boolean(text).then(|| None)
    }
}

fn scan_one_trojan_source(text: &str, _opts: &ScanOptions) -> Option<Option<Vec<Finding>>> {
    scan_trojan_source(text).then(|| None)
}

fn run_driver<P: AsRef<Path>>(
    paths: &[P],
    opts: &ScanOptions,
    scan_one: FileScanFn,
) -> Vec<FileReport> {
    let paths: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
    let threads = opts.effective_threads();

    if threads > 1 && paths.len() > 1 {
        return run_parallel(&paths, opts, scan_one, threads);
    }

    let mut reports = Vec::new();
    for path in &paths {
        if let Some(report) = scan_path(path, opts, scan_one) {
            reports.push(report);
        }
    }
    reports
}

/// Parallel path: per-file work has no data dependency, so files fan out
/// onto a rayon pool; input-index sorting restores deterministic order.
fn run_parallel(
    paths: &[PathBuf],
    opts: &ScanOptions,
    scan_one: FileScanFn,
    threads: usize,
) -> Vec<FileReport> {
    use rayon::prelude::*;

    let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool,
        // Pool construction failing (resource limits) degrades to serial.
        Err(_) => {
            let serial = ScanOptions { threads: Some(1), ..opts.clone() };
            return run_driver(paths, &serial, scan_one);
        }
    };

    let mut indexed: Vec<(usize, FileReport)> = pool.install(|| {
        paths
            .par_iter()
            .enumerate()
            .filter_map(|(idx, path)| scan_path(path, opts, scan_one).map(|r| (idx, r)))
            .collect()
    });
    indexed.sort_by_key(|&(idx, _)| idx);
    indexed.into_iter().map(|(_, report)| report).collect()
}

fn scan_path(path: &Path, opts: &ScanOptions, scan_one: FileScanFn) -> Option<FileReport> {
    if let Some(max) = opts.max_file_size {
        let len = std::fs::metadata(path).ok()?.len();
        if len > max {
            return None;
        }
    }
    let text = read_file_text(path).ok()?;
    let findings = scan_one(&text, opts)?;
    Some(FileReport { file: path.display().to_string(), findings })
}

fn read_file_text(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents).unwrap();
        path
    }

    #[test]
    fn missing_paths_are_skipped_silently() {
        let paths = [PathBuf::from("this-doesnt-really-exist-on-the-fs.js")];
        assert!(scan_files(&paths, &ScanOptions::default()).is_empty());
        assert!(trojan_source_files(&paths).is_empty());
    }

    #[test]
    fn clean_files_are_omitted_from_output() {
        let dir = TempDir::new().unwrap();
        let clean = write_file(&dir, "clean.js", b"const a = 1;\n");
        assert!(scan_files(&[clean], &ScanOptions::default()).is_empty());
    }

    #[test]
    fn boolean_mode_reports_file_without_findings() {
        let dir = TempDir::new().unwrap();
        let bad = write_file(&dir, "bad.js", "const a = \"user\u{202E} // x\"\n".as_bytes());
        let reports = scan_files(&[&bad], &ScanOptions::default());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].file, bad.display().to_string());
        assert!(reports[0].findings.is_none());
    }

    #[test]
    fn detailed_mode_reports_findings() {
        let dir = TempDir::new().unwrap();
        let bad = write_file(&dir, "bad.js", "x\nhidden\u{200B}stuff\n".as_bytes());
        let opts = ScanOptions { detailed: true, ..Default::default() };
        let reports = scan_files(&[bad], &opts);
        assert_eq!(reports.len(), 1);
        let findings = reports[0].findings.as_ref().unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
        assert_eq!(findings[0].code_point, "U+200B");
    }

    #[test]
    fn non_utf8_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let binary = write_file(&dir, "blob.bin", &[0xFF, 0xFE, 0x80, 0x00]);
        assert!(scan_files(&[binary], &ScanOptions::default()).is_empty());
    }

    #[test]
    fn oversized_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let bad = write_file(&dir, "bad.js", "\u{202E}".repeat(100).as_bytes());
        let opts = ScanOptions { max_file_size: Some(8), ..Default::default() };
        assert!(scan_files(&[&bad], &opts).is_empty());
        let opts = ScanOptions { max_file_size: Some(1 << 20), ..Default::default() };
        assert_eq!(scan_files(&[&bad], &opts).len(), 1);
    }

    #[test]
    fn output_preserves_input_order() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.js", "x\u{200B}\n".as_bytes());
        let b = write_file(&dir, "b.js", b"clean\n");
        let c = write_file(&dir, "c.js", "y\u{00A0}\n".as_bytes());
        let reports = scan_files(&[&c, &a, &b], &ScanOptions::default());
        let files: Vec<_> = reports.iter().map(|r| r.file.clone()).collect();
        assert_eq!(files, vec![c.display().to_string(), a.display().to_string()]);
    }

    #[test]
    fn parallel_matches_serial() {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for i in 0..16 {
            let contents = if i % 3 == 0 {
                format!("line{i}\nbad\u{200B}char\n")
            } else {
                format!("line{i}\nclean\n")
            };
            paths.push(write_file(&dir, &format!("f{i:02}.js"), contents.as_bytes()));
        }
        let serial = ScanOptions { detailed: true, threads: Some(1), ..Default::default() };
        let parallel = ScanOptions { detailed: true, threads: Some(4), ..Default::default() };
        assert_eq!(scan_files(&paths, &serial), scan_files(&paths, &parallel));
    }

    #[test]
    fn trojan_source_files_use_narrow_set() {
        let dir = TempDir::new().unwrap();
        let zwsp = write_file(&dir, "zwsp.js", "only\u{200B}zero width\n".as_bytes());
        let bidi = write_file(&dir, "bidi.js", "has \u{061C} mark\n".as_bytes());
        let reports = trojan_source_files(&[&zwsp, &bidi]);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].file, bidi.display().to_string());
        // The superset check flags both.
        assert_eq!(scan_files(&[&zwsp, &bidi], &ScanOptions::default()).len(), 2);
    }
}
