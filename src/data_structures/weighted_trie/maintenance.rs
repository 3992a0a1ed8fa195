// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Maintenance passes for the Weighted Trie: rebalance, decay and optimize.
//!
//! All passes walk the tree with an explicit stack so that deep tries cannot
//! exhaust the call stack. Children are pushed in reverse so that they are
//! popped in ascending character order, which keeps every pass pre-order.

use tracing::debug;

use super::node::TrieNode;
use super::WeightedTrie;

/// Aggregate weight figures gathered in one pre-order pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeProfile {
    /// Number of nodes, root included
    pub node_count: usize,

    /// Sum of every node weight
    pub total_weight: u64,

    /// Largest weight seen
    pub max_weight: u64,

    /// Depth of the first node in pre-order carrying `max_weight`
    pub max_weight_depth: usize,
}

impl TreeProfile {
    /// Profiles the tree rooted at `root` (depth 0).
    pub fn of(root: &TrieNode) -> Self {
        let mut profile = Self::default();
        let mut stack = vec![(root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            profile.node_count += 1;
            profile.total_weight = profile.total_weight.saturating_add(node.weight);
            if node.weight > profile.max_weight {
                profile.max_weight = node.weight;
                profile.max_weight_depth = depth;
            }
            stack.extend(node.children.values().rev().map(|child| (child, depth + 1)));
        }

        profile
    }

    /// Integer mean of all node weights.
    pub fn average_weight(&self) -> u64 {
        match self.node_count {
            0 => 0,
            n => self.total_weight / n as u64,
        }
    }
}

/// Why a rebalance check fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TriggerReason {
    MaxWeight(u64),
    AverageWeight(u64),
    MaxWeightDepth(usize),
}

/// Bookkeeping carried by one optimize stack frame.
struct OptimizeFrame<'a> {
    node: &'a mut TrieNode,
    depth: usize,
    path: String,
    report: Option<String>,
}

impl WeightedTrie {
    /// Evaluates the rebalance heuristic against the current tree.
    pub(crate) fn rebalance_reason(&self) -> Option<TriggerReason> {
        let profile = TreeProfile::of(&self.root);
        let trigger = &self.config.trigger;

        if profile.max_weight > trigger.max_weight {
            Some(TriggerReason::MaxWeight(profile.max_weight))
        } else if profile.average_weight() > trigger.average_weight {
            Some(TriggerReason::AverageWeight(profile.average_weight()))
        } else if profile.max_weight_depth > trigger.max_weight_depth {
            Some(TriggerReason::MaxWeightDepth(profile.max_weight_depth))
        } else {
            None
        }
    }

    /// Lists every stored word with its terminal weight, in pre-order.
    pub(crate) fn flatten(&self) -> Vec<(String, u64)> {
        let mut words = Vec::new();
        let mut stack = vec![(&self.root, String::new())];

        while let Some((node, path)) = stack.pop() {
            if node.is_terminal {
                words.push((path.clone(), node.weight));
            }
            for (c, child) in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(*c);
                stack.push((child, child_path));
            }
        }

        words
    }

    /// Discards the tree and reinserts every word, heaviest first.
    ///
    /// The sort is stable, so equal weights keep their pre-order position.
    /// Reinsertion does not count as operations and cannot retrigger itself.
    pub(crate) fn rebalance(&mut self) {
        let mut words = self.flatten();
        words.sort_by(|a, b| b.1.cmp(&a.1));

        let mut root = TrieNode::new();
        for (word, _) in &words {
            root.reinforce(word, 1);
        }

        self.root = root;
        self.operation_count = 0;
        self.rebalances += 1;

        debug!(words = words.len(), rebalances = self.rebalances, "Trie rebalanced");
    }

    /// Reduces every node weight by the configured decay factor, floored at zero.
    ///
    /// Terminal flags, shortcuts and structure are left as they are.
    pub fn apply_weight_decay(&mut self) {
        let factor = self.config.decay_factor;
        let mut visited = 0usize;
        let mut stack = vec![&mut self.root];

        while let Some(node) = stack.pop() {
            node.weight = node.weight.saturating_sub(factor);
            visited += 1;
            stack.extend(node.children.values_mut().rev());
        }

        debug!(nodes = visited, factor, "Weight decay applied");
    }

    /// Annotates heavy nodes with shortcuts from their parents.
    ///
    /// Every node deeper than one level whose weight exceeds
    /// `depth * depth_cost + (current_time - last_access_time) * age_cost`
    /// becomes its parent's shortcut. When several children of one parent
    /// qualify, the last one in traversal order wins. One report line is
    /// returned per shortcut set, in pre-order.
    pub fn optimize_paths(&mut self, current_time: i64) -> Vec<String> {
        let cost = self.config.optimize.clone();
        let mut reports = Vec::new();
        let mut stack = vec![OptimizeFrame {
            node: &mut self.root,
            depth: 0,
            path: String::new(),
            report: None,
        }];

        while let Some(frame) = stack.pop() {
            let OptimizeFrame {
                node,
                depth,
                path,
                report,
            } = frame;
            reports.extend(report);

            let child_depth = depth + 1;
            let mut chosen = None;
            let mut child_reports = Vec::with_capacity(node.children.len());

            for (c, child) in &node.children {
                if child_depth <= 1 {
                    child_reports.push(None);
                    continue;
                }
                let age = current_time.saturating_sub(child.last_access_time);
                let threshold = cost.threshold(child_depth, age);
                let weight = i64::try_from(child.weight).unwrap_or(i64::MAX);
                if weight > threshold {
                    chosen = Some(*c);
                    child_reports.push(Some(format!(
                        "Shortcut created: '{path}' -> '{path}{c}' (depth {child_depth}, weight {}, threshold {threshold}, age {age})",
                        child.weight
                    )));
                } else {
                    child_reports.push(None);
                }
            }

            if let Some(c) = chosen {
                node.shortcut = Some(c.to_string());
            }

            for ((c, child), report) in node.children.iter_mut().zip(child_reports).rev() {
                stack.push(OptimizeFrame {
                    node: child,
                    depth: child_depth,
                    path: format!("{path}{c}"),
                    report,
                });
            }
        }

        debug!(current_time, shortcuts = reports.len(), "Paths optimized");
        reports
    }
}
