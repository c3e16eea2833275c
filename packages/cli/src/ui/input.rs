//! Parsing of numbers typed at the menu prompts.
//!
//! Only the textual form is checked here. Range rules (such as the bookable
//! hours) belong to the registry.

use std::str::FromStr;

use crate::error::InputError;

/// Parse a non-empty run of ASCII digits.
pub fn parse_whole_number<T: FromStr>(text: &str) -> Result<T, InputError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotWholeNumber(text.to_string()));
    }
    text.parse()
        .map_err(|_| InputError::NotWholeNumber(text.to_string()))
}

/// Blank answers skip an optional filter.
pub fn non_blank(text: &str) -> Option<&str> {
    if text.is_empty() { None } else { Some(text) }
}

/// Parse an optional whole number; a blank answer gives `Ok(None)`.
pub fn parse_optional_number<T: FromStr>(text: &str) -> Result<Option<T>, InputError> {
    non_blank(text).map(parse_whole_number::<T>).transpose()
}
