// maskedit-core/src/validators.rs
//! Per-category character validation for mask placeholders.
//!
//! Each placeholder category accepts a fixed character set. Letters and digits
//! are ASCII only; "space" means any Unicode whitespace.
//!
//! License: MIT OR APACHE 2.0

use crate::masks::compiler::{CaseMode, PlaceholderCategory};

/// Returns `true` if `ch` belongs to the validation set of `category`.
///
/// # Arguments
///
/// * `category` - The placeholder category of the slot being filled.
/// * `ch` - The character after any case shift has been applied.
pub fn matches_category(category: PlaceholderCategory, ch: char) -> bool {
    match category {
        PlaceholderCategory::DigitRequired => ch.is_ascii_digit(),
        PlaceholderCategory::DigitOrSpace => ch.is_ascii_digit() || ch.is_whitespace(),
        PlaceholderCategory::DigitSpaceSign => {
            ch.is_ascii_digit() || ch.is_whitespace() || ch == '+' || ch == '-'
        }
        PlaceholderCategory::LetterRequired => ch.is_ascii_alphabetic(),
        PlaceholderCategory::LetterOrSpace => ch.is_ascii_alphabetic() || ch.is_whitespace(),
        PlaceholderCategory::CharRequired | PlaceholderCategory::CharOrSpace => true,
        PlaceholderCategory::AlnumRequired => ch.is_ascii_alphanumeric(),
        PlaceholderCategory::AlnumOrSpace => ch.is_ascii_alphanumeric() || ch.is_whitespace(),
    }
}

/// Applies a slot's case mode to a single character.
///
/// Mappings that expand to more than one character (e.g. `ß` -> `SS`) leave the
/// character unchanged.
pub fn apply_case(case_mode: CaseMode, ch: char) -> char {
    fn single(mut mapped: impl Iterator<Item = char>, original: char) -> char {
        match (mapped.next(), mapped.next()) {
            (Some(c), None) => c,
            _ => original,
        }
    }

    match case_mode {
        CaseMode::None => ch,
        CaseMode::Lower => single(ch.to_lowercase(), ch),
        CaseMode::Upper => single(ch.to_uppercase(), ch),
    }
}
