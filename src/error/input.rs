//! Input error module.
//!
//! Errors raised while validating what a user typed at the interactive menu.

use thiserror::Error;

/// Errors that can occur while validating interactive input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing was entered.
    #[error("Empty input, please enter a word")]
    EmptyWord,

    /// A word contained a character outside the accepted alphabet.
    #[error("Invalid character '{ch}' in '{word}'")]
    InvalidCharacter {
        /// The rejected word
        word: String,
        /// The first offending character
        ch: char,
    },

    /// A menu choice was not a number in range.
    #[error("Invalid choice '{input}', please enter a number between 1 and {max}")]
    InvalidChoice {
        /// The raw input
        input: String,
        /// Highest valid choice
        max: u8,
    },

    /// A timestamp could not be parsed as an integer.
    #[error("Invalid time '{0}', please enter an integer")]
    InvalidTimestamp(String),
}
