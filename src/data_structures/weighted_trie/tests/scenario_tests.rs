// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Scenario tests for the Weighted Trie.

use crate::data_structures::weighted_trie::{WeightedTrie, WeightedTrieConfig};

fn quiet_trie() -> WeightedTrie {
    WeightedTrie::with_config(WeightedTrieConfig::new().with_rebalance_threshold(u64::MAX))
}

#[test]
fn test_trie_basic_operations() {
    let mut trie = WeightedTrie::new();

    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert_eq!(trie.node_count(), 1);

    trie.insert("hello");
    assert!(!trie.is_empty());
    assert_eq!(trie.len(), 1);
    assert!(trie.search("hello"));
    assert!(trie.contains("hello"));
    assert!(!trie.search("hell"));
    assert!(!trie.search("hellos"));
    assert!(!trie.search("nonexistent"));

    assert!(trie.delete("hello"));
    assert!(!trie.search("hello"));
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
    assert!(!trie.delete("hello"));
}

#[test]
fn test_prefix_search_order() {
    let mut trie = WeightedTrie::new();
    for word in ["hello", "help", "helicopter", "world"] {
        trie.insert(word);
    }

    assert_eq!(trie.search_prefix("hel"), vec!["helicopter", "hello", "help"]);
    assert_eq!(trie.auto_complete("hel"), trie.search_prefix("hel"));
    assert_eq!(trie.search_prefix("w"), vec!["world"]);
    assert_eq!(
        trie.search_prefix(""),
        vec!["helicopter", "hello", "help", "world"]
    );
    assert!(trie.search_prefix("x").is_empty());
    assert!(trie.search_prefix("helpful").is_empty());
}

#[test]
fn test_wildcard_search() {
    let mut trie = WeightedTrie::new();
    for word in ["hat", "hit", "hot", "ham"] {
        trie.insert(word);
    }

    assert_eq!(trie.wildcard_search("h*t"), vec!["hat", "hit", "hot"]);
    assert_eq!(trie.wildcard_search("*a*"), vec!["ham", "hat"]);
    assert!(trie.wildcard_search("h*").is_empty());
    assert!(trie.wildcard_search("h**t").is_empty());
}

#[test]
fn test_reinsert_reinforces_weight() {
    let mut trie = quiet_trie();
    trie.insert("go");
    trie.insert("go");
    trie.insert("good");

    assert_eq!(trie.weight_of(""), Some(0));
    assert_eq!(trie.weight_of("g"), Some(3));
    assert_eq!(trie.weight_of("go"), Some(3));
    assert_eq!(trie.weight_of("goo"), Some(1));
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.operation_count(), 3);
}

#[test]
fn test_empty_word() {
    let mut trie = WeightedTrie::new();
    assert!(!trie.search(""));

    trie.insert("");
    assert!(trie.search(""));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.search_prefix(""), vec![""]);

    assert!(trie.delete(""));
    assert!(!trie.search(""));
    assert!(trie.is_empty());
}

#[test]
fn test_delete_preserves_shared_prefix() {
    let mut trie = WeightedTrie::new();
    trie.insert("car");
    trie.insert("cart");
    trie.insert("care");

    assert!(trie.delete("cart"));
    assert!(trie.search("car"));
    assert!(trie.search("care"));
    assert!(trie.weight_of("cart").is_none());

    // "car" has a child, so only the flag goes
    assert!(trie.delete("car"));
    assert!(!trie.search("car"));
    assert!(trie.search("care"));
    assert!(trie.weight_of("car").is_some());

    assert!(trie.delete("care"));
    assert!(trie.is_empty());
    assert_eq!(trie.orphan_count(), 0);
}

#[test]
fn test_delete_prunes_unique_suffix_only() {
    let mut trie = WeightedTrie::new();
    trie.insert("ab");
    trie.insert("abcde");

    assert!(trie.delete("abcde"));
    assert_eq!(trie.node_count(), 3);
    assert!(trie.search("ab"));
    assert_eq!(trie.orphan_count(), 0);
}

#[test]
fn test_delete_absent_words() {
    let mut trie = WeightedTrie::new();
    trie.insert("prefix");
    let before = trie.node_count();

    assert!(!trie.delete("pre"));
    assert!(!trie.delete("prefixes"));
    assert!(!trie.delete("other"));
    assert_eq!(trie.node_count(), before);
    assert!(trie.search("prefix"));
}

#[test]
fn test_delete_collapses_duplicates() {
    let mut trie = WeightedTrie::new();
    for _ in 0..5 {
        trie.insert("echo");
    }
    assert!(trie.delete("echo"));
    assert!(!trie.search("echo"));
}

#[test]
fn test_delete_clears_dangling_shortcut() {
    let mut trie = quiet_trie();
    // depth 3 needs more than 15
    for _ in 0..16 {
        trie.insert("abc");
    }
    trie.insert("ax");

    trie.optimize_paths(0);
    assert_eq!(trie.shortcut_of("a"), Some("ab".to_string()));
    assert_eq!(trie.shortcut_of("ab"), Some("abc".to_string()));

    assert!(trie.delete("abc"));
    assert_eq!(trie.shortcut_of("a"), None);
    assert_eq!(trie.shortcut_of("ab"), None);
    assert!(trie.shortcuts_resolve());
    assert!(trie.search("ax"));
}

#[test]
fn test_delete_keeps_live_shortcut() {
    let mut trie = quiet_trie();
    for _ in 0..11 {
        trie.insert("ab");
    }
    trie.insert("ac");
    trie.optimize_paths(0);
    assert_eq!(trie.shortcut_of("a"), Some("ab".to_string()));

    assert!(trie.delete("ac"));
    assert_eq!(trie.shortcut_of("a"), Some("ab".to_string()));
}

#[test]
fn test_rebalance_after_heavy_reinforcement() {
    let mut trie = WeightedTrie::with_config(WeightedTrieConfig::new().with_rebalance_threshold(61));
    trie.insert("dog");
    for _ in 0..59 {
        trie.insert("cat");
    }
    assert_eq!(trie.rebalances(), 0);
    assert_eq!(trie.weight_of("c"), Some(59));

    trie.insert("cat");
    assert_eq!(trie.rebalances(), 1);
    assert_eq!(trie.operation_count(), 0);
    assert!(trie.search("cat"));
    assert!(trie.search("dog"));
    assert_eq!(trie.weight_of("c"), Some(1));
}

#[test]
fn test_rebalance_waits_for_threshold() {
    let mut trie = WeightedTrie::with_config(WeightedTrieConfig::new().with_rebalance_threshold(5));
    for _ in 0..4 {
        trie.insert("z");
    }
    assert_eq!(trie.rebalances(), 0);

    // threshold reached but nothing is hot
    trie.insert("y");
    assert_eq!(trie.rebalances(), 0);
    assert_eq!(trie.operation_count(), 5);

    trie.insert("y");
    assert_eq!(trie.operation_count(), 6);
}

#[test]
fn test_rebalance_drops_shortcuts() {
    let mut trie = WeightedTrie::with_config(WeightedTrieConfig::new().with_rebalance_threshold(20));
    for _ in 0..11 {
        trie.insert("ab");
    }
    trie.optimize_paths(0);
    assert_eq!(trie.shortcut_count(), 1);

    for _ in 0..40 {
        trie.insert("ab");
    }
    assert!(trie.rebalances() >= 1);
    assert!(trie.search("ab"));
    assert!(trie.shortcuts_resolve());
}

#[test]
fn test_decay_never_underflows() {
    let mut trie = WeightedTrie::new();
    trie.insert("a");
    for _ in 0..10 {
        trie.apply_weight_decay();
    }
    assert_eq!(trie.weight_of("a"), Some(0));
    assert!(trie.search("a"));
}

#[test]
fn test_record_access_missing_node() {
    let mut trie = WeightedTrie::new();
    trie.insert("abc");
    assert!(trie.record_access("ab", 4));
    assert!(!trie.record_access("abd", 4));
    assert_eq!(trie.root().descendant("ab").map(|n| n.last_access_time), Some(4));
}

#[test]
fn test_clear() {
    let mut trie = WeightedTrie::new();
    trie.insert("one");
    trie.insert("two");
    trie.clear();
    assert!(trie.is_empty());
    assert_eq!(trie.operation_count(), 0);
    assert!(trie.words().is_empty());
}
