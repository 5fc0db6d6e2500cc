// Copyright (c) 2025 Kukui Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Kukui Trie.
//!
//! Nodes are owned by the trie that created them and addressed through
//! [`NodeId`] handles. A handle remembers which trie issued it, so a handle
//! from one trie is never mistaken for a node of another.

use super::node_map::NodeMap;

/// Handle to a node owned by a [`KukuiTrie`](super::KukuiTrie).
///
/// Handles are cheap to copy and stay valid for the lifetime of the trie,
/// since nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    owner: u64,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(owner: u64, index: usize) -> Self {
        Self { owner, index }
    }

    pub(crate) fn owner(self) -> u64 {
        self.owner
    }

    pub(crate) fn index(self) -> usize {
        self.index
    }
}

/// A node in the Kukui Trie.
///
/// Each node represents one character on a word path. Terminal nodes also
/// carry the complete word that ends at them.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Handle of this node within its trie
    id: NodeId,

    /// Character on the edge into this node; `None` only for the root
    value: Option<char>,

    /// Map of characters to child nodes
    pub(crate) children: NodeMap,

    /// The word ending here, if this node is terminal
    pub(crate) word: Option<String>,
}

impl TrieNode {
    pub(crate) fn new(id: NodeId, value: Option<char>) -> Self {
        Self {
            id,
            value,
            children: NodeMap::new(),
            word: None,
        }
    }

    /// Handle to pass back to the trie for deletion or update.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The character this node represents, `None` for the root.
    pub fn value(&self) -> Option<char> {
        self.value
    }

    /// Whether a word currently ends at this node.
    pub fn is_end(&self) -> bool {
        self.word.is_some()
    }

    /// The word ending at this node.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// The children of this node.
    pub fn children(&self) -> &NodeMap {
        &self.children
    }
}
