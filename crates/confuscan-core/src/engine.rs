//! Scan engine: boolean fast path and detailed findings path.
//!
//! The two modes are intentionally separate. The boolean path exists for CI
//! gating and short-circuits on the first hit without computing positions.
//! The detailed path never exits early: every suspicious character in the
//! text produces one finding, in line-then-column order.

use crate::classify::{category_label, character_name, is_suspicious};
use crate::findings::{code_point_hex, Finding, SNIPPET_MAX_CHARS};
use crate::lists::{confusable_set, trojan_source_set, DangerSet};

/// Any confusable present? Explicit-set containment first (one automaton
/// pass), then a classify sweep for range-only categories such as Cf/Cc.
pub fn scan_boolean(text: &str) -> bool {
    let set = confusable_set();
    if set.matches_text(text) {
        return true;
    }
    text.chars().any(is_suspicious)
}

/// Legacy boolean check over the bidi-only set. No category sweep: callers
/// of this entry point expect the narrow substring check and nothing more.
pub fn scan_trojan_source(text: &str) -> bool {
    trojan_source_set().matches_text(text)
}

/// Locate every suspicious character. Lines split on `\n` only; a `\r`
/// before the `\n` stays part of the line and shifts column numbers.
pub fn scan_detailed(text: &str) -> Vec<Finding> {
    scan_detailed_with(text, confusable_set())
}

fn scan_detailed_with(text: &str, set: &DangerSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (line_idx, line) in text.split('\n').enumerate() {
        let mut snippet: Option<String> = None;
        for (col_idx, ch) in line.chars().enumerate() {
            if !(set.contains(ch) || is_suspicious(ch)) {
                continue;
            }
            let code_point = ch as u32;
            // Same snippet for every finding on the line.
            let snippet = snippet
                .get_or_insert_with(|| line.chars().take(SNIPPET_MAX_CHARS).collect())
                .clone();
            findings.push(Finding {
                line: line_idx + 1,
                column: col_idx + 1,
                code_point: code_point_hex(code_point),
                name: character_name(code_point),
                category: category_label(code_point).to_string(),
                snippet,
            });
        }
    }

    findings
}
