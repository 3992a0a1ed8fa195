// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Weighted Trie Implementation
//!
//! An in-memory prefix tree whose nodes count how often insertions pass
//! through them. The weights drive two maintenance behaviours:
//!
//! - **Rebalance**: once enough insertions have accumulated and the tree looks
//!   "hot" (see [`RebalanceTrigger`]), the tree is rebuilt by reinserting every
//!   word in descending weight order.
//! - **Optimize**: heavy nodes are recorded as shortcuts on their parents.
//!   Shortcuts are advisory and only show up in the diagnostic rendering.
//!
//! A third pass, decay, lowers every weight by a fixed amount.
//!
//! Every operation is total: lookups of absent words report `false` or an
//! empty result rather than an error.
//!
//! # Example
//!
//! ```
//! use lehua_trie_lib::data_structures::weighted_trie::WeightedTrie;
//!
//! let mut trie = WeightedTrie::new();
//! for word in ["hello", "help", "helicopter", "world"] {
//!     trie.insert(word);
//! }
//!
//! assert!(trie.search("help"));
//! assert_eq!(trie.search_prefix("hel"), vec!["helicopter", "hello", "help"]);
//! assert_eq!(trie.wildcard_search("w*rld"), vec!["world"]);
//!
//! assert!(trie.delete("help"));
//! assert!(!trie.search("help"));
//! ```
//!
//! # Concurrency
//!
//! The trie is a single mutable resource. Share it across threads by wrapping
//! the whole instance in one lock; rebalance replaces the entire tree.

mod config;
mod maintenance;
mod node;
mod query;
mod render;
mod stats;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

pub use config::{OptimizeCost, RebalanceTrigger, WeightedTrieConfig};
pub use maintenance::TreeProfile;
pub use node::TrieNode;
pub use query::WILDCARD;
pub use stats::TrieStats;

/// Weighted, self-optimizing prefix tree.
#[derive(Debug, Clone)]
pub struct WeightedTrie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Insertions since the last rebalance
    operation_count: u64,

    /// Rebalances performed so far
    rebalances: u64,

    /// Tunables
    config: WeightedTrieConfig,
}

impl WeightedTrie {
    /// Creates a new empty `WeightedTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(WeightedTrieConfig::default())
    }

    /// Creates a new empty `WeightedTrie` with the specified configuration.
    pub fn with_config(config: WeightedTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            operation_count: 0,
            rebalances: 0,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &WeightedTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts `word`, reinforcing the weight of every node along its path.
    ///
    /// Inserting a word that is already present only adds weight. The empty
    /// word marks the root terminal. Once the operation count has reached the
    /// configured threshold, every insertion evaluates the rebalance trigger
    /// and rebuilds the tree if it fires.
    pub fn insert(&mut self, word: &str) {
        self.root.reinforce(word, 1);
        self.operation_count += 1;
        trace!(word, operation_count = self.operation_count, "Inserted word");

        if self.operation_count >= self.config.rebalance_threshold {
            if let Some(reason) = self.rebalance_reason() {
                debug!(?reason, "Rebalance triggered");
                self.rebalance();
            }
        }
    }

    /// Returns `true` iff `word` was inserted and not deleted since.
    pub fn search(&self, word: &str) -> bool {
        self.root
            .descendant(word)
            .is_some_and(|node| node.is_terminal)
    }

    /// Alias for [`WeightedTrie::search`].
    pub fn contains(&self, word: &str) -> bool {
        self.search(word)
    }

    /// Removes `word`, pruning every node on its path that no longer serves
    /// another word.
    ///
    /// Shortcuts pointing into a pruned subtree are cleared. Returns `true` if
    /// the word was present.
    pub fn delete(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();

        // Locate the path and decide how much of it becomes garbage.
        let mut path = Vec::with_capacity(chars.len() + 1);
        let mut node = &self.root;
        path.push(node);
        for c in &chars {
            match node.children.get(c) {
                Some(child) => {
                    node = child;
                    path.push(node);
                }
                None => return false,
            }
        }
        if !node.is_terminal {
            return false;
        }

        // Shallowest depth whose node, and everything below it on the path,
        // ends up childless and non-terminal. The root is never pruned.
        let mut cut = None;
        if node.children.is_empty() && !chars.is_empty() {
            cut = Some(chars.len());
            for depth in (1..chars.len()).rev() {
                let ancestor = path[depth];
                if ancestor.is_terminal || ancestor.children.len() != 1 {
                    break;
                }
                cut = Some(depth);
            }
        }

        match cut {
            Some(depth) => {
                let parent_path: String = chars[..depth - 1].iter().collect();
                if let Some(parent) = self.root.descendant_mut(&parent_path) {
                    parent.children.remove(&chars[depth - 1]);
                }
                self.drop_dangling_shortcuts(&parent_path);
                trace!(word, pruned_from = depth, "Deleted word");
            }
            None => {
                if let Some(end) = self.root.descendant_mut(word) {
                    end.is_terminal = false;
                }
                trace!(word, "Deleted word without pruning");
            }
        }

        true
    }

    /// Clears shortcuts along `path` (root included) whose targets are gone.
    fn drop_dangling_shortcuts(&mut self, path: &str) {
        let mut node = &mut self.root;
        node.drop_dangling_shortcut();
        for c in path.chars() {
            let Some(next) = node.children.get_mut(&c) else {
                break;
            };
            node = next;
            node.drop_dangling_shortcut();
        }
    }

    /// Returns every stored word starting with `prefix`, in ascending
    /// character order. Returns an empty list if no node exists for `prefix`.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        match self.root.descendant(prefix) {
            Some(start) => query::collect_words(start, prefix),
            None => Vec::new(),
        }
    }

    /// Returns every stored word matching `pattern`, where `*` stands for
    /// exactly one arbitrary character.
    pub fn wildcard_search(&self, pattern: &str) -> Vec<String> {
        query::collect_matches(&self.root, pattern)
    }

    /// Completion candidates for `prefix`. Same as [`WeightedTrie::search_prefix`].
    pub fn auto_complete(&self, prefix: &str) -> Vec<String> {
        self.search_prefix(prefix)
    }

    /// Sets the last access time of the node for `prefix`.
    ///
    /// Nothing in the trie updates access times on its own; callers that want
    /// recency-aware optimization record accesses here. Returns `false` if no
    /// node exists for `prefix`.
    pub fn record_access(&mut self, prefix: &str, time: i64) -> bool {
        match self.root.descendant_mut(prefix) {
            Some(node) => {
                node.last_access_time = time;
                true
            }
            None => false,
        }
    }

    /// Weight of the node for `prefix`, if it exists.
    pub fn weight_of(&self, prefix: &str) -> Option<u64> {
        self.root.descendant(prefix).map(|node| node.weight)
    }

    /// Full path of the shortcut target held by the node for `prefix`.
    pub fn shortcut_of(&self, prefix: &str) -> Option<String> {
        let shortcut = self.root.descendant(prefix)?.shortcut.as_deref()?;
        Some(format!("{prefix}{shortcut}"))
    }

    /// Every stored word in ascending character order.
    pub fn words(&self) -> Vec<String> {
        query::collect_words(&self.root, "")
    }

    /// Number of stored words. Walks the whole tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += usize::from(node.is_terminal);
            stack.extend(node.children.values());
        }
        count
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        !self.root.is_terminal && self.root.children.is_empty()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        TreeProfile::of(&self.root).node_count
    }

    /// Number of nodes holding a shortcut.
    pub fn shortcut_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += usize::from(node.shortcut.is_some());
            stack.extend(node.children.values());
        }
        count
    }

    /// Insertions since the last rebalance.
    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    /// Rebalances performed over this trie's lifetime.
    pub fn rebalances(&self) -> u64 {
        self.rebalances
    }

    /// Removes every word and resets the counters.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.operation_count = 0;
        self.rebalances = 0;
    }

    /// Counts reachable nodes that are neither terminal nor have children.
    #[cfg(test)]
    pub(crate) fn orphan_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TrieNode> = self.root.children.values().collect();
        while let Some(node) = stack.pop() {
            count += usize::from(node.is_prunable());
            stack.extend(node.children.values());
        }
        count
    }

    /// Returns `true` if every shortcut resolves to a strict descendant.
    #[cfg(test)]
    pub(crate) fn shortcuts_resolve(&self) -> bool {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let Some(path) = &node.shortcut {
                if path.is_empty() || node.descendant(path).is_none() {
                    return false;
                }
            }
            stack.extend(node.children.values());
        }
        true
    }
}

impl Default for WeightedTrie {
    fn default() -> Self {
        Self::new()
    }
}
