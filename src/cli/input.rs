//! Validation of words, patterns and timestamps typed by the user.

use crate::data_structures::weighted_trie::WILDCARD;
use crate::error::input::InputError;

/// Accepts a single alphabetic word, or a pattern when `allow_wildcard` is set.
///
/// Only the first whitespace-separated token is considered.
pub fn parse_word(line: &str, allow_wildcard: bool) -> Result<String, InputError> {
    let word = line.split_whitespace().next().ok_or(InputError::EmptyWord)?;
    if let Some(ch) = word
        .chars()
        .find(|&c| !(c.is_ascii_alphabetic() || (allow_wildcard && c == WILDCARD)))
    {
        return Err(InputError::InvalidCharacter {
            word: word.to_string(),
            ch,
        });
    }
    Ok(word.to_string())
}

/// Parses the integer timestamp used by the optimize pass.
pub fn parse_time(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::InvalidTimestamp(trimmed.to_string()))
}
