//! Finding and per-file report records (wire format for JSON renderers).

use serde::Serialize;

/// Snippets keep at most this many codepoints of the containing line.
pub const SNIPPET_MAX_CHARS: usize = 80;

/// One located occurrence of a suspicious character.
///
/// `line` and `column` are 1-based; columns count codepoints within the
/// line, not bytes. Field names are a stable wire contract for JSON
/// consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub line: usize,
    pub column: usize,
    #[serde(rename = "codePoint")]
    pub code_point: String,
    pub name: String,
    pub category: String,
    pub snippet: String,
}

/// Scan result for one file. Files with nothing to report are omitted from
/// the aggregate entirely, so `findings` is never `Some(vec![])`; in boolean
/// mode the field is absent from the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<Vec<Finding>>,
}

/// `U+` followed by at least four uppercase hex digits, widening naturally
/// for codepoints above U+FFFF.
pub fn code_point_hex(code_point: u32) -> String {
    format!("U+{:04X}", code_point)
}
