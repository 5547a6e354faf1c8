//! Area name normalisation.

use crate::error::LedgerError;

/// Title-case a string following Python's `str.title` word rule.
///
/// A character is lower-cased when the one before it is cased (has an upper
/// or lower case form) and upper-cased otherwise. Uncased characters such as
/// digits, punctuation and CJK ideographs start a new word, so
/// `"undead's burg"` becomes `"Undead'S Burg"` and `"日本abc"` becomes
/// `"日本Abc"`. Upper case stands in for Unicode title case, which only
/// differs for a handful of digraph letters.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_cased = false;
    for ch in input.chars() {
        if prev_is_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_is_cased = ch.is_lowercase() || ch.is_uppercase();
    }
    out
}

/// Trim and title-case an area name, rejecting empty input.
pub fn normalize_area(input: &str) -> Result<String, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::EmptyName);
    }
    Ok(title_case(trimmed))
}

/// Trim a merchant name, rejecting empty input. Case is preserved.
pub fn normalize_merchant(input: &str) -> Result<String, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::EmptyName);
    }
    Ok(trimmed.to_string())
}
