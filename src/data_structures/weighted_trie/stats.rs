// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Point-in-time statistics for the Weighted Trie.

use serde::Serialize;

use super::maintenance::TreeProfile;
use super::WeightedTrie;

/// Snapshot of the trie's shape and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Number of stored words
    pub words: usize,
    /// Number of nodes, root included
    pub nodes: usize,
    pub total_weight: u64,
    pub max_weight: u64,
    pub max_weight_depth: usize,
    /// Insertions since the last rebalance
    pub operation_count: u64,
    /// Rebalances performed over the trie's lifetime
    pub rebalances: u64,
    /// Nodes currently holding a shortcut
    pub shortcuts: usize,
}

impl WeightedTrie {
    /// Collects a statistics snapshot. Walks the whole tree.
    pub fn stats(&self) -> TrieStats {
        let profile = TreeProfile::of(&self.root);
        TrieStats {
            words: self.len(),
            nodes: profile.node_count,
            total_weight: profile.total_weight,
            max_weight: profile.max_weight,
            max_weight_depth: profile.max_weight_depth,
            operation_count: self.operation_count,
            rebalances: self.rebalances,
            shortcuts: self.shortcut_count(),
        }
    }
}
