//! Console report rendering: colorized box-drawing output for minimal and
//! verbose modes, plus the aggregate statistics behind both.

use confuscan_core::{FileReport, Finding};

// Box drawing (U+2500 block).
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const T_RIGHT: char = '├';

// ANSI color codes.
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const BOX_WIDTH: usize = 50;

/// Bidirectional overrides and isolates: the characters that can reorder
/// displayed code, reported as CRITICAL rather than WARNING.
const CRITICAL_CHARS: [u32; 6] = [0x202E, 0x202D, 0x2066, 0x2067, 0x2068, 0x2069];

/// Aggregate counters shown in the summary box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_files: usize,
    pub files_with_issues: usize,
    pub total_issues: usize,
    pub critical_count: usize,
    pub warning_count: usize,
}

/// `code_point` is the wire string, e.g. `"U+202E"`.
pub fn is_critical(code_point: &str) -> bool {
    u32::from_str_radix(code_point.trim_start_matches("U+"), 16)
        .map(|cp| CRITICAL_CHARS.contains(&cp))
        .unwrap_or(false)
}

fn severity_counts(findings: &[Finding]) -> (usize, usize) {
    let critical = findings.iter().filter(|f| is_critical(&f.code_point)).count();
    (critical, findings.len() - critical)
}

/// Tally results. Boolean-mode entries (no findings list) count as a single
/// warning-level issue each.
pub fn calculate_stats(results: &[FileReport], total_files: usize) -> Stats {
    let mut stats = Stats { total_files, files_with_issues: results.len(), ..Default::default() };
    for result in results {
        match result.findings.as_deref() {
            Some(findings) => {
                let (critical, warning) = severity_counts(findings);
                stats.critical_count += critical;
                stats.warning_count += warning;
                stats.total_issues += findings.len();
            }
            None => {
                stats.warning_count += 1;
                stats.total_issues += 1;
            }
        }
    }
    stats
}

fn colorize(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

fn horizontal(n: usize) -> String {
    HORIZONTAL.to_string().repeat(n)
}

fn box_header(title: &str) -> String {
    let padded = format!(" {title} ");
    format!(
        "{TOP_LEFT}{rule}{TOP_RIGHT}\n{VERTICAL}{padded:<width$}{VERTICAL}\n{BOTTOM_LEFT}{rule}{BOTTOM_RIGHT}",
        rule = horizontal(BOX_WIDTH - 2),
        width = BOX_WIDTH - 2,
    )
}

fn box_line(content: &str) -> String {
    let padded = format!(" {content} ");
    format!("{VERTICAL}{padded:<width$}{VERTICAL}", width = BOX_WIDTH - 2)
}

fn summary_box(stats: &Stats, with_severity: bool) -> Vec<String> {
    let mut out = Vec::new();
    out.push(format!(
        "{TOP_LEFT}{side} SCAN SUMMARY {side}{TOP_RIGHT}",
        side = horizontal(17)
    ));
    out.push(box_line(&format!("Files Scanned:      {}", stats.total_files)));
    out.push(box_line(&format!("Files with Issues:  {}", stats.files_with_issues)));
    out.push(box_line(&format!("Total Issues:       {}", stats.total_issues)));
    if with_severity {
        out.push(box_line(&format!("Critical:           {}", stats.critical_count)));
        out.push(box_line(&format!("Warnings:           {}", stats.warning_count)));
    }
    out.push(format!("{BOTTOM_LEFT}{}{BOTTOM_RIGHT}", horizontal(BOX_WIDTH - 2)));
    out
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn risk_description(code_point: &str) -> &'static str {
    let cp = u32::from_str_radix(code_point.trim_start_matches("U+"), 16).unwrap_or(0);
    match cp {
        0x202E | 0x202D => "Can reverse the meaning of code",
        0x2066..=0x2069 => "Can manipulate text direction",
        0x200B => "Invisible character that may hide logic",
        0x00A0 => "May hide malicious logic or confuse developers",
        0x00AD => "Invisible hyphenation that may hide logic",
        _ => "May be used to hide or confuse code logic",
    }
}

/// Minimal failure report: per-file issue counts and a one-line footer.
pub fn format_minimal(results: &[FileReport], stats: &Stats) -> String {
    let mut out = Vec::new();
    out.push(box_header("Confuscan Scanner"));
    out.push(String::new());
    out.push(colorize("Security Issues Found:", BOLD));
    out.push(String::new());

    for result in results {
        let (issue_count, has_critical) = match result.findings.as_deref() {
            Some(findings) => (findings.len(), severity_counts(findings).0 > 0),
            None => (1, false),
        };
        let icon = if has_critical { "❌" } else { "⚠️" };
        out.push(format!(
            "  ({issue_count} issue{}) {icon}  {}",
            plural(issue_count),
            colorize(&result.file, CYAN)
        ));
    }

    out.push(String::new());
    out.push(colorize("Run with --verbose for detailed information.", GRAY));
    out.push(String::new());
    out.push(format!(
        "{BOTTOM_LEFT}{HORIZONTAL} {} issue{} found across {} file{}",
        stats.total_issues,
        plural(stats.total_issues),
        stats.files_with_issues,
        plural(stats.files_with_issues)
    ));
    out.join("\n")
}

/// Verbose failure report: per-file boxes with snippet, position marker,
/// category and risk, then the summary box.
pub fn format_verbose(results: &[FileReport], stats: &Stats) -> String {
    let mut out = Vec::new();
    out.push(box_header("Confuscan Security Scanner"));
    out.push(String::new());
    out.push(format!("Scanning {} files...", stats.total_files));
    out.push(String::new());

    for (index, result) in results.iter().enumerate() {
        let findings = result.findings.as_deref().unwrap_or(&[]);
        out.push(format!(
            "{TOP_LEFT}{HORIZONTAL} File: {}",
            colorize(&result.file, CYAN)
        ));
        out.push(VERTICAL.to_string());

        let has_critical = severity_counts(findings).0 > 0;
        let (label, color, text) = if has_critical {
            ("[CRITICAL]", RED, "Bidirectional Text Attack Detected")
        } else {
            ("[WARNING]", YELLOW, "Confusable Characters")
        };
        out.push(format!(
            "{VERTICAL}  {} {text}",
            colorize(label, &format!("{color}{BOLD}"))
        ));
        out.push(VERTICAL.to_string());

        for (finding_index, finding) in findings.iter().enumerate() {
            let line_col = colorize(&format!("Line {}:{}", finding.line, finding.column), GRAY);
            let code_point = colorize(&finding.code_point, BOLD);
            out.push(format!("{VERTICAL}  {line_col}  >  {code_point}  {}", finding.name));

            out.push(format!("{VERTICAL}  {T_RIGHT}{}", horizontal(45)));
            out.push(format!("{VERTICAL}  {VERTICAL} {}", finding.snippet));
            // Position marker: column is 1-based.
            out.push(format!(
                "{VERTICAL}  {VERTICAL} {}^ invisible character here",
                " ".repeat(finding.column.saturating_sub(1))
            ));
            out.push(format!("{VERTICAL}  {BOTTOM_LEFT}{}", horizontal(45)));

            out.push(format!(
                "{VERTICAL}  {} {}",
                colorize("Category:", GRAY),
                finding.category
            ));
            out.push(format!(
                "{VERTICAL}  {} {}",
                colorize("Risk:", GRAY),
                risk_description(&finding.code_point)
            ));
            if finding_index + 1 < findings.len() {
                out.push(VERTICAL.to_string());
            }
        }

        out.push(VERTICAL.to_string());
        out.push(format!(
            "{BOTTOM_LEFT}{HORIZONTAL} {} issue{} found",
            findings.len(),
            plural(findings.len())
        ));
        if index + 1 < results.len() {
            out.push(String::new());
        }
    }

    out.push(String::new());
    out.extend(summary_box(stats, true));
    out.push(String::new());
    out.push(format!(
        "{} Security issues detected. Please review and fix.",
        colorize("[FAILED]", &format!("{RED}{BOLD}"))
    ));
    out.join("\n")
}

/// Nothing found.
pub fn format_success(stats: &Stats, verbose: bool) -> String {
    let mut out = Vec::new();
    if verbose {
        out.push(box_header("Confuscan Security Scanner"));
        out.push(String::new());
        out.push(format!("Scanning {} files...", stats.total_files));
        out.push(String::new());
        out.push(format!(
            "{} No security issues detected",
            colorize("[PASSED]", &format!("{GREEN}{BOLD}"))
        ));
        out.push(String::new());
        out.extend(summary_box(stats, false));
    } else {
        out.push(box_header("Confuscan Scanner"));
        out.push(String::new());
        out.push(format!("{} No security issues detected", colorize("✓", GREEN)));
        out.push(String::new());
        out.push(format!(
            "{BOTTOM_LEFT}{HORIZONTAL} {} file{} scanned successfully",
            stats.total_files,
            plural(stats.total_files)
        ));
    }
    out.join("\n")
}

/// Plain per-finding lines for STDIN mode.
pub fn format_stdin_findings(findings: &[Finding]) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "[{}] Detected cases of trojan source for input passed to STDIN:",
        colorize("x", RED)
    ));
    for finding in findings {
        out.push(format!(
            "Line {}:{} - {} {} [{}]",
            finding.line, finding.column, finding.code_point, finding.name, finding.category
        ));
        out.push(format!("Snippet: {}", finding.snippet));
    }
    out.join("\n")
}
