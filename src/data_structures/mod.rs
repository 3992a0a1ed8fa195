//! Data structures for the Lehua Trie.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Deterministic traversal order
//! - Iterative traversals, so deep structures cannot overflow the stack

pub mod weighted_trie;

// Re-export common data structures
pub use weighted_trie::{WeightedTrie, WeightedTrieConfig};
