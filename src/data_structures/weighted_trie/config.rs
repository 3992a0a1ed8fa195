// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Weighted Trie.

use serde::{Deserialize, Serialize};

/// Tunables for the Weighted Trie.
///
/// Every constant used by the rebalance trigger, the decay pass and the
/// optimize pass lives here so that each trie instance carries its own policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedTrieConfig {
    /// Number of insertions between rebalance checks
    pub rebalance_threshold: u64,

    /// Amount subtracted from every node weight by one decay pass
    pub decay_factor: u64,

    /// Conditions under which a rebalance check fires
    pub trigger: RebalanceTrigger,

    /// Cost model for the optimize pass
    pub optimize: OptimizeCost,
}

impl WeightedTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - rebalance_threshold: 10
    /// - decay_factor: 1
    /// - trigger: max weight 50, average weight 20, max-weight depth 5
    /// - optimize: depth cost 5, age cost 2
    pub fn new() -> Self {
        Self {
            rebalance_threshold: 10,
            decay_factor: 1,
            trigger: RebalanceTrigger::default(),
            optimize: OptimizeCost::default(),
        }
    }

    /// Set how many insertions must happen before the trigger is evaluated.
    pub fn with_rebalance_threshold(mut self, threshold: u64) -> Self {
        self.rebalance_threshold = threshold;
        self
    }

    /// Set the per-pass weight reduction applied by decay.
    pub fn with_decay_factor(mut self, decay_factor: u64) -> Self {
        self.decay_factor = decay_factor;
        self
    }

    /// Replace the rebalance trigger.
    pub fn with_trigger(mut self, trigger: RebalanceTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Replace the optimize cost model.
    pub fn with_optimize_cost(mut self, optimize: OptimizeCost) -> Self {
        self.optimize = optimize;
        self
    }
}

impl Default for WeightedTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Heuristic that decides whether accumulated reinforcement justifies a rebuild.
///
/// The trigger fires if any single limit is exceeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebalanceTrigger {
    /// Fires when any node weight exceeds this value
    pub max_weight: u64,

    /// Fires when the integer mean weight over all nodes exceeds this value
    pub average_weight: u64,

    /// Fires when the heaviest node sits deeper than this
    pub max_weight_depth: usize,
}

impl Default for RebalanceTrigger {
    fn default() -> Self {
        Self {
            max_weight: 50,
            average_weight: 20,
            max_weight_depth: 5,
        }
    }
}

/// Threshold model for shortcut creation.
///
/// A node at `depth` qualifies when its weight exceeds
/// `depth * depth_cost + age * age_cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeCost {
    /// Cost charged per level of depth
    pub depth_cost: i64,

    /// Cost charged per time unit since the node's last recorded access
    pub age_cost: i64,
}

impl OptimizeCost {
    /// Computes the weight a node must exceed to earn a shortcut.
    pub fn threshold(&self, depth: usize, age: i64) -> i64 {
        let depth = i64::try_from(depth).unwrap_or(i64::MAX);
        depth
            .saturating_mul(self.depth_cost)
            .saturating_add(age.saturating_mul(self.age_cost))
    }
}

impl Default for OptimizeCost {
    fn default() -> Self {
        Self {
            depth_cost: 5,
            age_cost: 2,
        }
    }
}
