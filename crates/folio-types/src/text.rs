//! Case-insensitive ordinal text comparison.
//!
//! Both helpers fold each character through its simple (one-to-one) uppercase
//! mapping; a character whose uppercase form is several characters, such as
//! `ß` or the `ﬁ` ligature, is left as it is. Folded text is compared by UTF-16
//! code unit. No locale or collation rules are applied, so the result is the
//! same on every machine.

use std::cmp::Ordering;

/// Simple uppercase mapping of one character.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Compare two strings ignoring case, UTF-16 code unit by code unit.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    fold(a).encode_utf16().cmp(fold(b).encode_utf16())
}

/// Returns `true` if `needle` occurs in `haystack`, ignoring case.
///
/// An empty needle matches every haystack.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}
