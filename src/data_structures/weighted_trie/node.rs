// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Weighted Trie.
//!
//! Each node owns its children through an ordered map so that every traversal
//! visits children in ascending character order. A node may additionally hold
//! a shortcut: a non-owning reference to one of its strict descendants, stored
//! as the character path from the node down to that descendant.

use std::collections::BTreeMap;

/// A node in the Weighted Trie.
///
/// Each node represents one character position along some inserted word.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Map of characters to child nodes, iterated in ascending order
    pub children: BTreeMap<char, TrieNode>,

    /// Whether the path from the root to this node spells an inserted word
    pub is_terminal: bool,

    /// Number of insertions that passed through this node, less decay
    pub weight: u64,

    /// Timestamp of the last access recorded by a caller
    pub last_access_time: i64,

    /// Relative path to a strict descendant set by the optimize pass
    pub shortcut: Option<String>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows `path` below this node, one child per character.
    pub fn descendant(&self, path: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`TrieNode::descendant`].
    pub fn descendant_mut(&mut self, path: &str) -> Option<&mut TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.children.get_mut(&c)?;
        }
        Some(node)
    }

    /// Walks `word` from this node, creating missing children and adding
    /// `amount` to the weight of every node entered. The final node is marked
    /// terminal. This node's own weight is left untouched.
    pub fn reinforce(&mut self, word: &str, amount: u64) {
        let mut node = self;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
            node.weight = node.weight.saturating_add(amount);
        }
        node.is_terminal = true;
    }

    /// A node with no children that is not terminal serves no word.
    pub fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Clears the shortcut if its target no longer exists.
    ///
    /// Returns `true` if a shortcut was dropped.
    pub fn drop_dangling_shortcut(&mut self) -> bool {
        let dangling = self
            .shortcut
            .as_deref()
            .is_some_and(|path| path.is_empty() || self.descendant(path).is_none());
        if dangling {
            self.shortcut = None;
        }
        dangling
    }
}

impl Drop for TrieNode {
    // Unlinks descendants one at a time so deep chains cannot overflow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
