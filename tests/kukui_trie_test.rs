// Copyright (c) 2025 Kukui Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Kukui Trie public API.

use std::sync::{Arc, Barrier};
use std::thread;

use kukui_trie::config::{ConfigLoader, KukuiConfig};
use kukui_trie::data_structures::kukui_trie::WordOperation;
use kukui_trie::{KukuiTrie, KukuiTrieError, SharedKukuiTrie, TrieConfig};

#[test]
fn test_phone_book_scenario() {
    let mut trie = KukuiTrie::new();
    trie.add_word("games night").unwrap();
    trie.add_word("0813 022 6951").unwrap();

    let prefix = trie.find("0813").unwrap();
    assert!(!prefix.is_end());
    assert_eq!(prefix.value(), Some('3'));

    assert_eq!(trie.find_word("0813").unwrap_err(), KukuiTrieError::NotFound);
    assert_eq!(trie.find_word("08130").unwrap_err(), KukuiTrieError::NotFound);

    let number = trie.find_word("0813 022 6951").unwrap();
    assert!(number.is_end());
    assert_eq!(number.word(), Some("0813 022 6951"));
}

#[test]
fn test_empty_input_reports_operation() {
    let mut trie = KukuiTrie::new();

    assert_eq!(
        trie.add_word("").unwrap_err(),
        KukuiTrieError::EmptyInput {
            operation: WordOperation::Add
        }
    );
    assert_eq!(
        trie.find("").unwrap_err(),
        KukuiTrieError::EmptyInput {
            operation: WordOperation::Search
        }
    );
    assert_eq!(
        trie.find_word("").unwrap_err(),
        KukuiTrieError::EmptyInput {
            operation: WordOperation::Search
        }
    );
}

#[test]
fn test_walk_children_from_root() {
    let mut trie = KukuiTrie::new();
    trie.add_word("ab").unwrap();
    trie.add_word("ac").unwrap();

    let root = trie.root();
    assert_eq!(root.children().len(), 1);

    let a = trie.node(root.children().get('a')).unwrap();
    let mut next: Vec<char> = a.children().keys().collect();
    next.sort_unstable();
    assert_eq!(next, vec!['b', 'c']);

    for (ch, id) in a.children().iter() {
        let child = trie.node(id).unwrap();
        assert_eq!(child.value(), Some(ch));
        assert!(child.is_end());
    }
}

#[test]
fn test_structural_garbage_is_kept() {
    let mut trie = KukuiTrie::new();
    let id = trie.add_word("pau").unwrap().id();
    let nodes = trie.node_count();

    trie.delete_word(id).unwrap();
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), nodes);
    assert!(!trie.node(id).unwrap().is_end());
}

#[test]
fn test_trie_from_default_config() {
    let config: KukuiConfig = ConfigLoader::new(None::<&str>, "KUKUI_INTEGRATION_TEST")
        .load()
        .unwrap();

    let mut trie = KukuiTrie::with_config(config.trie);
    assert_eq!(trie.config(), &TrieConfig::default());
    assert!(trie.add_word(&"x".repeat(1_000)).is_ok());
}

#[test]
fn test_shared_trie_concurrent_updates() {
    let trie = SharedKukuiTrie::new();
    let thread_count = 4;
    let words_per_thread = 100;
    let barrier = Arc::new(Barrier::new(thread_count));

    let handles: Vec<_> = (0..thread_count)
        .map(|t| {
            let trie = trie.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..words_per_thread {
                    let id = trie.add_word(&format!("old-{t}-{i}")).unwrap();
                    trie.update_word(id, &format!("new-{t}-{i}")).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(trie.len(), thread_count * words_per_thread);
    assert!(trie.words_with_prefix("old-").is_empty());
    assert_eq!(
        trie.words_with_prefix("new-").len(),
        thread_count * words_per_thread
    );
    assert!(trie.find("old-0-0").is_ok());
}
