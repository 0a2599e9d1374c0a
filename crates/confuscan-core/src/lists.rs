//! Danger lists, built once at process start and never mutated.
//!
//! Two sets are kept deliberately distinct:
//! - the legacy bidi-only set used by `has_trojan_source*`;
//! - the full confusable set (37 explicit entries + 240 generated Extended
//!   Variation Selectors = 277), used by `has_confusables*`.
//!
//! Both sets compile their entries into an Aho-Corasick automaton so the
//! boolean fast path is a single pass over the input.

use std::collections::HashSet;
use std::sync::OnceLock;

use aho_corasick::AhoCorasick;

/// Bidirectional control characters. The minimal legacy set:
/// `has_trojan_source*` looks for exactly these and nothing else.
pub const DANGEROUS_BIDI_CHARS: [char; 12] = [
    '\u{061C}', // ARABIC LETTER MARK
    '\u{200E}', // LEFT-TO-RIGHT MARK
    '\u{200F}', // RIGHT-TO-LEFT MARK
    '\u{202A}', // LEFT-TO-RIGHT EMBEDDING
    '\u{202B}', // RIGHT-TO-LEFT EMBEDDING
    '\u{202C}', // POP DIRECTIONAL FORMATTING
    '\u{202D}', // LEFT-TO-RIGHT OVERRIDE
    '\u{202E}', // RIGHT-TO-LEFT OVERRIDE
    '\u{2066}', // LEFT-TO-RIGHT ISOLATE
    '\u{2067}', // RIGHT-TO-LEFT ISOLATE
    '\u{2068}', // FIRST STRONG ISOLATE
    '\u{2069}', // POP DIRECTIONAL ISOLATE
];

/// Explicit confusable characters, in stable order. The generated Extended
/// Variation Selector range is appended after these.
pub const EXPLICIT_CONFUSABLES: [char; 37] = [
    '\u{061C}', // ARABIC LETTER MARK
    '\u{200E}', // LEFT-TO-RIGHT MARK
    '\u{200F}', // RIGHT-TO-LEFT MARK
    '\u{202A}', // LEFT-TO-RIGHT EMBEDDING
    '\u{202B}', // RIGHT-TO-LEFT EMBEDDING
    '\u{202C}', // POP DIRECTIONAL FORMATTING
    '\u{202D}', // LEFT-TO-RIGHT OVERRIDE
    '\u{202E}', // RIGHT-TO-LEFT OVERRIDE
    '\u{2066}', // LEFT-TO-RIGHT ISOLATE
    '\u{2067}', // RIGHT-TO-LEFT ISOLATE
    '\u{2068}', // FIRST STRONG ISOLATE
    '\u{2069}', // POP DIRECTIONAL ISOLATE
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{2060}', // WORD JOINER
    '\u{2063}', // INVISIBLE SEPARATOR
    '\u{00AD}', // SOFT HYPHEN
    '\u{00A0}', // NO-BREAK SPACE
    '\u{FE00}', // VARIATION SELECTOR-1
    '\u{FE01}', // VARIATION SELECTOR-2
    '\u{FE02}', // VARIATION SELECTOR-3
    '\u{FE03}', // VARIATION SELECTOR-4
    '\u{FE04}', // VARIATION SELECTOR-5
    '\u{FE05}', // VARIATION SELECTOR-6
    '\u{FE06}', // VARIATION SELECTOR-7
    '\u{FE07}', // VARIATION SELECTOR-8
    '\u{FE08}', // VARIATION SELECTOR-9
    '\u{FE09}', // VARIATION SELECTOR-10
    '\u{FE0A}', // VARIATION SELECTOR-11
    '\u{FE0B}', // VARIATION SELECTOR-12
    '\u{FE0C}', // VARIATION SELECTOR-13
    '\u{FE0D}', // VARIATION SELECTOR-14
    '\u{FE0E}', // VARIATION SELECTOR-15
    '\u{FE0F}', // VARIATION SELECTOR-16
    '\u{FEFF}', // ZERO WIDTH NO-BREAK SPACE (BOM)
    '\u{180E}', // MONGOLIAN VOWEL SEPARATOR
];

/// Extended Variation Selectors Supplement, inclusive bounds.
const EXTENDED_VS_FIRST: u32 = 0xE0100;
const EXTENDED_VS_LAST: u32 = 0xE01EF;

/// An immutable set of dangerous characters with a compiled substring
/// matcher. Shared freely across threads; construction happens once.
pub struct DangerSet {
    entries: Vec<char>,
    members: HashSet<char>,
    matcher: AhoCorasick,
}

impl DangerSet {
    fn new(entries: Vec<char>) -> Self {
        let patterns: Vec<String> = entries.iter().map(|c| c.to_string()).collect();
        let matcher = AhoCorasick::new(&patterns).expect("compile danger set matcher");
        let members = entries.iter().copied().collect();
        Self { entries, members, matcher }
    }

    /// Entries in construction order (explicit first, then generated range
    /// in ascending codepoint order).
    pub fn entries(&self) -> &[char] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Single-pass substring containment over every entry.
    pub fn matches_text(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Membership test for one character.
    pub fn contains(&self, ch: char) -> bool {
        self.members.contains(&ch)
    }
}

/// The full confusable set: explicit entries followed by the generated
/// Extended Variation Selector range (240 codepoints, ascending).
pub fn confusable_set() -> &'static DangerSet {
    static SET: OnceLock<DangerSet> = OnceLock::new();
    SET.get_or_init(|| {
        let mut entries: Vec<char> = EXPLICIT_CONFUSABLES.to_vec();
        for code_point in EXTENDED_VS_FIRST..=EXTENDED_VS_LAST {
            // The range contains only valid scalar values.
            if let Some(ch) = char::from_u32(code_point) {
                entries.push(ch);
            }
        }
        DangerSet::new(entries)
    })
}

/// The legacy bidi-only set used by `has_trojan_source*`.
pub fn trojan_source_set() -> &'static DangerSet {
    static SET: OnceLock<DangerSet> = OnceLock::new();
    SET.get_or_init(|| DangerSet::new(DANGEROUS_BIDI_CHARS.to_vec()))
}
