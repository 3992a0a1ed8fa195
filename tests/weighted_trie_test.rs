// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Weighted Trie through its public API.

use lehua_trie_lib::data_structures::weighted_trie::{
    OptimizeCost, RebalanceTrigger, WeightedTrie, WeightedTrieConfig,
};
use test_case::test_case;

fn trie_of(words: &[&str]) -> WeightedTrie {
    let mut trie = WeightedTrie::new();
    for word in words {
        trie.insert(word);
    }
    trie
}

#[test_case("hel" => vec!["helicopter", "hello", "help"]; "shared prefix")]
#[test_case("help" => vec!["help"]; "whole word")]
#[test_case("" => vec!["helicopter", "hello", "help", "world"]; "empty prefix")]
#[test_case("x" => Vec::<&str>::new(); "missing prefix")]
fn test_search_prefix(prefix: &str) -> Vec<String> {
    trie_of(&["hello", "help", "helicopter", "world"]).search_prefix(prefix)
}

#[test_case("h*t" => vec!["hat", "hit", "hot"]; "middle wildcard")]
#[test_case("ha*" => vec!["ham", "hat"]; "trailing wildcard")]
#[test_case("***" => vec!["ham", "hat", "hit", "hot"]; "all wildcards")]
#[test_case("h*" => Vec::<&str>::new(); "too short")]
#[test_case("h***" => Vec::<&str>::new(); "too long")]
#[test_case("hot" => vec!["hot"]; "no wildcard")]
fn test_wildcard_search(pattern: &str) -> Vec<String> {
    trie_of(&["hat", "hit", "hot", "ham"]).wildcard_search(pattern)
}

#[test_case(&["a"], "a" => true; "single letter")]
#[test_case(&["abc"], "ab" => false; "prefix only")]
#[test_case(&["abc"], "abcd" => false; "overshoot")]
#[test_case(&["", "a"], "" => true; "empty word")]
#[test_case(&[], "" => false; "empty trie")]
fn test_search(words: &[&str], probe: &str) -> bool {
    trie_of(words).search(probe)
}

#[test]
fn test_hot_word_triggers_rebalance() {
    let config = WeightedTrieConfig::new().with_rebalance_threshold(61);
    let mut trie = WeightedTrie::with_config(config);
    for _ in 0..60 {
        trie.insert("cat");
    }
    assert_eq!(trie.rebalances(), 0);

    trie.insert("cat");
    assert_eq!(trie.rebalances(), 1);
    assert!(trie.search("cat"));
}

#[test]
fn test_deep_heavy_node_triggers_rebalance() {
    let trigger = RebalanceTrigger {
        max_weight: 1_000,
        average_weight: 1_000,
        max_weight_depth: 2,
    };
    let config = WeightedTrieConfig::new()
        .with_rebalance_threshold(1)
        .with_trigger(trigger);
    let mut trie = WeightedTrie::with_config(config);

    // the heaviest node is the first in pre-order, at depth 1
    trie.insert("abcd");
    assert_eq!(trie.rebalances(), 0);
    assert_eq!(trie.operation_count(), 1);
}

#[test]
fn test_custom_optimize_cost() {
    let config = WeightedTrieConfig::new()
        .with_rebalance_threshold(u64::MAX)
        .with_optimize_cost(OptimizeCost {
            depth_cost: 1,
            age_cost: 0,
        });
    let mut trie = WeightedTrie::with_config(config);
    for _ in 0..4 {
        trie.insert("abc");
    }

    let report = trie.optimize_paths(1_000);
    assert_eq!(report.len(), 2);
    assert_eq!(trie.shortcut_of("a").as_deref(), Some("ab"));
    assert_eq!(trie.shortcut_of("ab").as_deref(), Some("abc"));
    assert!(trie.to_string().contains("=> abc"));
}

#[test]
fn test_deep_word_does_not_overflow() {
    let word = "a".repeat(20_000);
    let mut trie = WeightedTrie::with_config(WeightedTrieConfig::new().with_rebalance_threshold(1));
    trie.insert(&word);
    trie.insert(&word);
    assert!(trie.search(&word));

    trie.apply_weight_decay();
    trie.optimize_paths(0);
    assert_eq!(trie.search_prefix(&word[..19_999]).len(), 1);
    assert_eq!(trie.wildcard_search(&word).len(), 1);
    assert_eq!(trie.stats().nodes, 20_001);

    assert!(trie.delete(&word));
    assert!(trie.is_empty());
}
