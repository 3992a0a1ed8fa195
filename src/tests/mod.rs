//! Test modules for the Lehua Trie.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and their messages
//! - Interactive sessions driven from in-memory buffers
//! - Shared proptest strategies and fixtures


pub use test_utils::{create_test_dir, pattern_strategy, vocabulary_strategy, word_strategy};
