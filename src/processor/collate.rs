//! Locale-aware name comparison.
//!
//! Approximates default-locale collation in three levels: base letters,
//! then accents, then case (lowercase first). Code point order breaks
//! whatever is left, so only identical strings compare equal.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two names the way a user expects them listed.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased letters with accents stripped.
fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lowercased, with accents kept as separate marks after their letters.
fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// One flag per letter: `false` for lowercase sorts before `true`.
fn case_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}
