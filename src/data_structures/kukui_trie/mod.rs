// Copyright (c) 2025 Kukui Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kukui Trie Implementation
//!
//! A character-indexed prefix tree over strings. Words are walked one Unicode
//! code point at a time, so a multi-byte character is a single edge.
//!
//! Deletion is logical: it clears the terminal state of a node and never
//! removes nodes, so every prefix that was ever added stays walkable with
//! [`KukuiTrie::find`].
//!
//! # Example
//!
//! ```
//! use kukui_trie::data_structures::kukui_trie::{KukuiTrie, KukuiTrieError};
//!
//! let mut trie = KukuiTrie::new();
//! trie.add_word("games night").unwrap();
//!
//! // Prefix lookup succeeds on any walked path
//! assert!(!trie.find("games").unwrap().is_end());
//!
//! // Exact lookup needs a terminal node
//! assert_eq!(trie.find_word("games").unwrap_err(), KukuiTrieError::NotFound);
//!
//! // Delete through the handle handed out by a lookup
//! let id = trie.find_word("games night").unwrap().id();
//! trie.delete_word(id).unwrap();
//! assert!(trie.find("games night").is_ok());
//! assert!(trie.find_word("games night").is_err());
//! ```

mod config;
mod error;
mod node;
mod node_map;
mod shared;

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace, warn};

pub use config::{TrieConfig, MAX_INITIAL_CAPACITY};
pub use error::{KukuiTrieError, KukuiTrieResult, WordOperation};
pub use node::{NodeId, TrieNode};
pub use node_map::NodeMap;
pub use shared::SharedKukuiTrie;

/// Source of owner tags for node handles.
static NEXT_TRIE_ID: AtomicU64 = AtomicU64::new(1);

/// Kukui Trie is a prefix tree supporting insertion, prefix and exact-word
/// lookup, logical deletion and update.
///
/// Key features:
/// * Unicode code point edges
/// * Prefix lookup distinct from exact-word lookup
/// * Logical deletion through node handles
/// * Optional depth limit for added words
///
/// The trie is not synchronized. Use [`SharedKukuiTrie`] to share one
/// between threads.
#[derive(Debug)]
pub struct KukuiTrie {
    /// Owner tag stamped into every handle this trie issues
    id: u64,

    /// Node storage; index 0 is the root
    nodes: Vec<TrieNode>,

    /// Number of terminal nodes
    words: usize,

    /// Configuration options
    config: TrieConfig,
}

impl KukuiTrie {
    /// Creates a new empty `KukuiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `KukuiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: TrieConfig) -> Self {
        let id = NEXT_TRIE_ID.fetch_add(1, Ordering::Relaxed);
        let mut nodes = Vec::new();
        if nodes.try_reserve(config.initial_capacity.max(1)).is_err() {
            warn!(
                initial_capacity = config.initial_capacity,
                "Could not reserve node slots, growing on demand"
            );
        }
        nodes.push(TrieNode::new(NodeId::new(id, 0), None));

        Self {
            id,
            nodes,
            words: 0,
            config,
        }
    }

    /// Returns the configuration this trie was created with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.nodes[0]
    }

    /// Returns the node behind `id`, or `None` if this trie did not issue it.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        if id.owner() != self.id {
            return None;
        }
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut TrieNode> {
        if id.owner() != self.id {
            return None;
        }
        self.nodes.get_mut(id.index())
    }

    /// Adds a word to the trie.
    ///
    /// Missing nodes along the path are created. The final node becomes
    /// terminal and stores `word`, replacing any word it held before.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to add.
    ///
    /// # Returns
    ///
    /// * `Ok(&TrieNode)` - The terminal node for `word`.
    /// * `Err(KukuiTrieError)` - `EmptyInput` for an empty word, `WordTooLong`
    ///   if the word exceeds the configured depth.
    pub fn add_word(&mut self, word: &str) -> KukuiTrieResult<&TrieNode> {
        if word.is_empty() {
            return Err(KukuiTrieError::empty_add());
        }

        if let Some(max_depth) = self.config.max_depth {
            let depth = word.chars().count();
            if depth > max_depth {
                warn!(word, depth, max_depth, "Rejected word deeper than trie limit");
                return Err(KukuiTrieError::WordTooLong {
                    word: word.to_owned(),
                    max_depth,
                });
            }
        }

        let mut current = self.root().id();
        for ch in word.chars() {
            current = self.child_or_insert(current, ch);
        }

        let node = &mut self.nodes[current.index()];
        if node.word.is_none() {
            self.words += 1;
        }
        node.word = Some(word.to_owned());
        debug!(word, "Added word");

        Ok(&self.nodes[current.index()])
    }

    /// Returns the child of `parent` at `ch`, creating it if missing.
    fn child_or_insert(&mut self, parent: NodeId, ch: char) -> NodeId {
        let children = &self.nodes[parent.index()].children;
        if children.contains(ch) {
            return children.get(ch);
        }

        let child = NodeId::new(self.id, self.nodes.len());
        self.nodes.push(TrieNode::new(child, Some(ch)));
        self.nodes[parent.index()].children.add(ch, child);
        trace!(value = %ch, index = child.index(), "Created node");

        child
    }

    /// Walks the character path of `word` and returns the node reached.
    ///
    /// This is a prefix lookup: the node need not be terminal.
    ///
    /// # Returns
    ///
    /// * `Ok(&TrieNode)` - The node at the end of the path.
    /// * `Err(KukuiTrieError)` - `EmptyInput` for an empty word, `NotFound` if
    ///   any character along the path is missing.
    pub fn find(&self, word: &str) -> KukuiTrieResult<&TrieNode> {
        if word.is_empty() {
            return Err(KukuiTrieError::empty_search());
        }

        let mut current = self.root();
        for ch in word.chars() {
            if !current.children.contains(ch) {
                return Err(KukuiTrieError::NotFound);
            }
            current = &self.nodes[current.children.get(ch).index()];
        }

        Ok(current)
    }

    /// Looks up `word` as a complete word.
    ///
    /// # Returns
    ///
    /// * `Ok(&TrieNode)` - The terminal node for `word`.
    /// * `Err(KukuiTrieError)` - Any error from [`KukuiTrie::find`], or
    ///   `NotFound` when the path exists but no word ends there.
    pub fn find_word(&self, word: &str) -> KukuiTrieResult<&TrieNode> {
        let node = self.find(word)?;
        if !node.is_end() {
            return Err(KukuiTrieError::NotFound);
        }
        Ok(node)
    }

    /// Returns `true` if `word` was added and not since deleted.
    pub fn contains_word(&self, word: &str) -> bool {
        self.find_word(word).is_ok()
    }

    /// Clears the terminal state of `node`.
    ///
    /// No node is removed, so the path stays walkable and longer words that
    /// share it are untouched. Obtain the handle from a lookup first.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word was deleted.
    /// * `Err(KukuiTrieError)` - `InvalidState` if the node is not terminal,
    ///   `NotFound` if this trie did not issue the handle.
    pub fn delete_word(&mut self, node: NodeId) -> KukuiTrieResult<()> {
        let node = self.node_mut(node).ok_or(KukuiTrieError::NotFound)?;
        let word = node.word.take().ok_or(KukuiTrieError::InvalidState)?;

        self.words -= 1;
        debug!(word = %word, "Deleted word");

        Ok(())
    }

    /// Replaces the word at `node` with `new_word`.
    ///
    /// Deletes first, then adds. A failed delete stops the update. A failed
    /// add (for example an empty `new_word`) leaves the old word deleted.
    ///
    /// # Returns
    ///
    /// * `Ok(&TrieNode)` - The terminal node for `new_word`, which may be a
    ///   different node than the one passed in.
    /// * `Err(KukuiTrieError)` - The first error from the delete or the add.
    pub fn update_word(&mut self, node: NodeId, new_word: &str) -> KukuiTrieResult<&TrieNode> {
        self.delete_word(node)?;
        debug!(new_word, "Updating word");
        self.add_word(new_word)
    }

    /// Returns every word at or below `prefix`, sorted.
    ///
    /// An empty prefix lists every word. An absent prefix yields nothing.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let start = if prefix.is_empty() {
            self.root()
        } else {
            match self.find(prefix) {
                Ok(node) => node,
                Err(_) => return Vec::new(),
            }
        };

        let mut words = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(word) = node.word() {
                words.push(word.to_owned());
            }
            stack.extend(node.children.iter().map(|(_, child)| &self.nodes[child.index()]));
        }

        words.sort_unstable();
        words
    }

    /// Number of words currently in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word is currently in the trie.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of allocated nodes, including the root.
    ///
    /// Never decreases: deletion leaves nodes in place.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for KukuiTrie {
    fn default() -> Self {
        Self::new()
    }
}
