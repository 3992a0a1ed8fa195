//! Error module for the Lehua Trie crate.
//!
//! The trie engine itself is total and never fails. Errors only arise at the
//! edges: loading configuration, validating user input and talking to the
//! terminal.

use thiserror::Error;

pub mod config;
pub mod input;

/// Result type alias used throughout the crate.
pub type LehuaResult<T> = Result<T, LehuaError>;

/// Core error enum for the Lehua Trie crate.
#[derive(Error, Debug)]
pub enum LehuaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors from validating words, patterns or menu choices.
    #[error("Input error: {0}")]
    Input(#[from] input::InputError),

    /// IO errors that may occur while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
