//! Lehua Trie Library
//!
//! This library contains a weighted, self-optimizing prefix tree together
//! with the configuration, error handling and interactive front end used by
//! the `lehua` binary. The trie can also be embedded on its own.
//!
//! # Architecture
//!
//! - [`data_structures::weighted_trie`]: the engine. Insertions reinforce node
//!   weights; maintenance passes rebalance, decay and annotate the tree.
//! - [`config`]: layered configuration (defaults, file, environment).
//! - [`error`]: error types for everything outside the engine.
//! - [`cli`]: the interactive menu, generic over its input and output.

pub mod cli;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lehua Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
