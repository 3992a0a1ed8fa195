// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Read-only traversals: prefix collection and wildcard matching.

use super::node::TrieNode;

/// Pattern character matching exactly one trie level.
pub const WILDCARD: char = '*';

/// Collects every terminal path at or below `start`, in pre-order.
///
/// `prefix` is the path from the root to `start` and is prepended to every
/// collected word.
pub(crate) fn collect_words(start: &TrieNode, prefix: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut stack = vec![(start, prefix.to_string())];

    while let Some((node, path)) = stack.pop() {
        if node.is_terminal {
            words.push(path.clone());
        }
        for (c, child) in node.children.iter().rev() {
            let mut child_path = path.clone();
            child_path.push(*c);
            stack.push((child, child_path));
        }
    }

    words
}

/// Collects every word whose characters match `pattern` position for position.
///
/// A [`WILDCARD`] matches any single child at its position; any other
/// character must match literally. Matches always have the pattern's length.
pub(crate) fn collect_matches(root: &TrieNode, pattern: &str) -> Vec<String> {
    let pattern: Vec<char> = pattern.chars().collect();
    let mut matches = Vec::new();
    let mut stack = vec![(root, String::new(), 0usize)];

    while let Some((node, path, index)) = stack.pop() {
        let Some(&expected) = pattern.get(index) else {
            if node.is_terminal {
                matches.push(path);
            }
            continue;
        };

        if expected == WILDCARD {
            for (c, child) in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(*c);
                stack.push((child, child_path, index + 1));
            }
        } else if let Some(child) = node.children.get(&expected) {
            let mut child_path = path;
            child_path.push(expected);
            stack.push((child, child_path, index + 1));
        }
    }

    matches
}
