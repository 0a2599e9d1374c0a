//! Codepoint classification (pure functions, no I/O).
//!
//! Precedence is fixed: Allowed wins over everything for TAB/LF/CR, then
//! Variation Selector, Format (Cf), Control (Cc), explicit Confusable.
//! Classification is total over any `u32` input; unmatched values are benign.

use crate::lists::EXPLICIT_CONFUSABLES;

/// Control characters that are always safe: TAB, LF, CR.
pub const ALLOWED_CONTROL_CHARS: [u32; 3] = [0x09, 0x0A, 0x0D];

/// Unicode Format (Cf) ranges, inclusive. Unicode 15.1.
const FORMAT_CHAR_RANGES: [(u32, u32); 21] = [
    (0x00AD, 0x00AD),   // SOFT HYPHEN
    (0x0600, 0x0605),   // ARABIC NUMBER SIGN..ARABIC NUMBER MARK ABOVE
    (0x061C, 0x061C),   // ARABIC LETTER MARK
    (0x06DD, 0x06DD),   // ARABIC END OF AYAH
    (0x070F, 0x070F),   // SYRIAC ABBREVIATION MARK
    (0x0890, 0x0891),   // ARABIC POUND MARK ABOVE..ARABIC PIASTRE MARK ABOVE
    (0x08E2, 0x08E2),   // ARABIC DISPUTED END OF AYAH
    (0x180E, 0x180E),   // MONGOLIAN VOWEL SEPARATOR
    (0x200B, 0x200F),   // ZERO WIDTH SPACE..RIGHT-TO-LEFT MARK
    (0x202A, 0x202E),   // LEFT-TO-RIGHT EMBEDDING..RIGHT-TO-LEFT OVERRIDE
    (0x2060, 0x2064),   // WORD JOINER..INVISIBLE PLUS
    (0x2066, 0x206F),   // LEFT-TO-RIGHT ISOLATE..NOMINAL DIGIT SHAPES
    (0xFEFF, 0xFEFF),   // ZERO WIDTH NO-BREAK SPACE
    (0xFFF9, 0xFFFB),   // INTERLINEAR ANNOTATION ANCHOR..TERMINATOR
    (0x110BD, 0x110BD), // KAITHI NUMBER SIGN
    (0x110CD, 0x110CD), // KAITHI NUMBER SIGN ABOVE
    (0x13430, 0x1343F), // EGYPTIAN HIEROGLYPH VERTICAL JOINER..END WALLED ENCLOSURE
    (0x1BCA0, 0x1BCA3), // SHORTHAND FORMAT LETTER OVERLAP..UP STEP
    (0x1D173, 0x1D17A), // MUSICAL SYMBOL BEGIN BEAM..END PHRASE
    (0xE0001, 0xE0001), // LANGUAGE TAG
    (0xE0020, 0xE007F), // TAG SPACE..CANCEL TAG
];

/// Fixed name table for well-known dangerous codepoints.
const CHAR_NAMES: [(u32, &str); 33] = [
    (0x00AD, "SOFT HYPHEN"),
    (0x061C, "ARABIC LETTER MARK"),
    (0x180E, "MONGOLIAN VOWEL SEPARATOR"),
    (0x200B, "ZERO WIDTH SPACE"),
    (0x200C, "ZERO WIDTH NON-JOINER"),
    (0x200D, "ZERO WIDTH JOINER"),
    (0x200E, "LEFT-TO-RIGHT MARK"),
    (0x200F, "RIGHT-TO-LEFT MARK"),
    (0x202A, "LEFT-TO-RIGHT EMBEDDING"),
    (0x202B, "RIGHT-TO-LEFT EMBEDDING"),
    (0x202C, "POP DIRECTIONAL FORMATTING"),
    (0x202D, "LEFT-TO-RIGHT OVERRIDE"),
    (0x202E, "RIGHT-TO-LEFT OVERRIDE"),
    (0x2060, "WORD JOINER"),
    (0x2061, "FUNCTION APPLICATION"),
    (0x2062, "INVISIBLE TIMES"),
    (0x2063, "INVISIBLE SEPARATOR"),
    (0x2064, "INVISIBLE PLUS"),
    (0x2066, "LEFT-TO-RIGHT ISOLATE"),
    (0x2067, "RIGHT-TO-LEFT ISOLATE"),
    (0x2068, "FIRST STRONG ISOLATE"),
    (0x2069, "POP DIRECTIONAL ISOLATE"),
    (0x206A, "INHIBIT SYMMETRIC SWAPPING"),
    (0x206B, "ACTIVATE SYMMETRIC SWAPPING"),
    (0x206C, "INHIBIT ARABIC FORM SHAPING"),
    (0x206D, "ACTIVATE ARABIC FORM SHAPING"),
    (0x206E, "NATIONAL DIGIT SHAPES"),
    (0x206F, "NOMINAL DIGIT SHAPES"),
    (0x00A0, "NO-BREAK SPACE"),
    (0xFEFF, "ZERO WIDTH NO-BREAK SPACE"),
    (0xFFF9, "INTERLINEAR ANNOTATION ANCHOR"),
    (0xFFFA, "INTERLINEAR ANNOTATION SEPARATOR"),
    (0xFFFB, "INTERLINEAR ANNOTATION TERMINATOR"),
];

/// Mutually exclusive category for a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// TAB, LF or CR; never flagged.
    Allowed,
    /// U+FE00..=U+FE0F or U+E0100..=U+E01EF.
    VariationSelector,
    /// Unicode Cf (Format).
    Format,
    /// Unicode Cc (Control), C0/C1 ranges.
    Control,
    /// In the explicit confusable list but outside the ranges above (NBSP).
    Confusable,
    /// Benign.
    None,
}

/// Codepoint falls in one of the fixed Cf ranges.
pub fn is_format_char(code_point: u32) -> bool {
    FORMAT_CHAR_RANGES
        .iter()
        .any(|&(start, end)| code_point >= start && code_point <= end)
}

/// Codepoint is in the C0 (0x00..=0x1F) or C1 (0x7F..=0x9F) control range.
pub fn is_control_char(code_point: u32) -> bool {
    code_point <= 0x1F || (0x7F..=0x9F).contains(&code_point)
}

fn is_variation_selector(code_point: u32) -> bool {
    (0xFE00..=0xFE0F).contains(&code_point) || (0xE0100..=0xE01EF).contains(&code_point)
}

/// Classify a codepoint. Pure and total: any value not matched by a range or
/// the explicit list comes back as `Category::None`.
pub fn classify(code_point: u32) -> Category {
    if ALLOWED_CONTROL_CHARS.contains(&code_point) {
        return Category::Allowed;
    }
    if is_variation_selector(code_point) {
        return Category::VariationSelector;
    }
    if is_format_char(code_point) {
        return Category::Format;
    }
    if is_control_char(code_point) {
        return Category::Control;
    }
    if char::from_u32(code_point).is_some_and(|c| EXPLICIT_CONFUSABLES.contains(&c)) {
        return Category::Confusable;
    }
    Category::None
}

/// A character is suspicious when it classifies as anything other than
/// `Allowed` or `None`.
pub fn is_suspicious(ch: char) -> bool {
    !matches!(classify(ch as u32), Category::Allowed | Category::None)
}

/// Display label for a codepoint's category. Detection never consults this;
/// it exists for reports only. Codepoints outside every range (the explicit
/// list stragglers such as NBSP) label as `Confusable`.
pub fn category_label(code_point: u32) -> &'static str {
    match classify(code_point) {
        Category::Allowed => "Allowed",
        Category::VariationSelector => "Variation Selector",
        Category::Format => "Cf (Format)",
        Category::Control => "Cc (Control)",
        Category::Confusable | Category::None => "Confusable",
    }
}

/// Human-readable name for a codepoint.
///
/// Variation Selectors are numbered sequentially: 1..=16 for the base block,
/// 17..=256 for the extended block. That numbering is a compatibility
/// contract and must not change.
pub fn character_name(code_point: u32) -> String {
    if (0xFE00..=0xFE0F).contains(&code_point) {
        return format!("VARIATION SELECTOR-{}", code_point - 0xFE00 + 1);
    }
    if (0xE0100..=0xE01EF).contains(&code_point) {
        return format!("VARIATION SELECTOR-{}", code_point - 0xE0100 + 17);
    }
    if is_control_char(code_point) {
        if code_point <= 0x1F {
            return format!("CONTROL CHARACTER (C0 control: {:#X})", code_point);
        }
        return format!("CONTROL CHARACTER (C1 control: {:#X})", code_point);
    }
    CHAR_NAMES
        .iter()
        .find(|&&(cp, _)| cp == code_point)
        .map(|&(_, name)| name.to_string())
        .unwrap_or_else(|| format!("UNKNOWN (U+{:04X})", code_point))
}
