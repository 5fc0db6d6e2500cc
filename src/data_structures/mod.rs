//! Data structures for the Kukui Trie crate.
//!
//! The trie itself lives in [`kukui_trie`]. All implementations adhere to
//! the project requirements:
//! - No unsafe code
//! - Typed errors for every recoverable failure
//! - Panics only on broken internal preconditions

pub mod kukui_trie;

// Re-export common data structures
pub use kukui_trie::{
    KukuiTrie, KukuiTrieError, KukuiTrieResult, NodeId, SharedKukuiTrie, TrieConfig, TrieNode,
};
