// Copyright (c) 2025 Kukui Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe wrapper around [`KukuiTrie`].
//!
//! Child maps are shared along every path, so per-node locking is not safe.
//! The whole trie sits behind one exclusive lock held for each operation.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::{KukuiTrie, KukuiTrieResult, NodeId, TrieConfig};

/// A [`KukuiTrie`] that can be cloned and shared between threads.
///
/// Operations return owned values since node borrows cannot outlive the
/// lock. Use [`SharedKukuiTrie::lock`] to run several steps, such as a
/// lookup followed by a delete, under a single acquisition.
///
/// # Examples
///
/// ```
/// use kukui_trie::data_structures::kukui_trie::SharedKukuiTrie;
///
/// let trie = SharedKukuiTrie::new();
/// let id = trie.add_word("aloha").unwrap();
///
/// let handle = trie.clone();
/// std::thread::spawn(move || {
///     handle.add_word("mahalo").unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(trie.len(), 2);
/// trie.delete_word(id).unwrap();
/// assert!(!trie.contains_word("aloha"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedKukuiTrie {
    inner: Arc<Mutex<KukuiTrie>>,
}

impl SharedKukuiTrie {
    /// Creates a new empty shared trie with default configuration.
    pub fn new() -> Self {
        Self::from_trie(KukuiTrie::new())
    }

    /// Creates a new empty shared trie with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self::from_trie(KukuiTrie::with_config(config))
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: KukuiTrie) -> Self {
        Self {
            inner: Arc::new(Mutex::new(trie)),
        }
    }

    /// Acquires the lock for multi-step work.
    pub fn lock(&self) -> MutexGuard<'_, KukuiTrie> {
        self.inner.lock()
    }

    /// Adds a word and returns the handle of its terminal node.
    pub fn add_word(&self, word: &str) -> KukuiTrieResult<NodeId> {
        self.inner.lock().add_word(word).map(|node| node.id())
    }

    /// Prefix lookup; returns the handle of the node reached.
    pub fn find(&self, word: &str) -> KukuiTrieResult<NodeId> {
        self.inner.lock().find(word).map(|node| node.id())
    }

    /// Exact-word lookup; returns the handle of the terminal node.
    pub fn find_word(&self, word: &str) -> KukuiTrieResult<NodeId> {
        self.inner.lock().find_word(word).map(|node| node.id())
    }

    /// Returns `true` if `word` is currently in the trie.
    pub fn contains_word(&self, word: &str) -> bool {
        self.inner.lock().contains_word(word)
    }

    /// Clears the terminal state of `node`.
    pub fn delete_word(&self, node: NodeId) -> KukuiTrieResult<()> {
        self.inner.lock().delete_word(node)
    }

    /// Replaces the word at `node` with `new_word` under one lock.
    pub fn update_word(&self, node: NodeId, new_word: &str) -> KukuiTrieResult<NodeId> {
        self.inner
            .lock()
            .update_word(node, new_word)
            .map(|node| node.id())
    }

    /// Every word at or below `prefix`, sorted.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.inner.lock().words_with_prefix(prefix)
    }

    /// Number of words currently in the trie.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if no word is currently in the trie.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
