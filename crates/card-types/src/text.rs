//! Text predicates shared by the identity types.
//!
//! Blankness and length follow JVM string semantics: whitespace is the
//! `Character.isWhitespace` set and length is counted in UTF-16 code units.

/// Whitespace as the JVM defines it.
///
/// Unicode `White_Space` minus the no-break spaces (U+00A0, U+2007, U+202F)
/// and NEL (U+0085), plus the information separators U+001C..=U+001F.
pub(crate) fn is_jvm_whitespace(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// `true` if `s` is empty or contains only whitespace.
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(is_jvm_whitespace)
}

/// Length in UTF-16 code units.
pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
