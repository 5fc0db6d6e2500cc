// Copyright (c) 2025 Kukui Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Kukui Trie.

use serde::{Deserialize, Serialize};

/// Largest `initial_capacity` accepted from loaded configuration.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Configuration options for the Kukui Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Maximum number of characters in an added word (`None` for unbounded)
    pub max_depth: Option<usize>,

    /// Number of node slots to reserve when the trie is created
    pub initial_capacity: usize,
}

impl TrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_depth: None (unbounded)
    /// - initial_capacity: 64
    pub fn new() -> Self {
        Self {
            max_depth: None,
            initial_capacity: 64,
        }
    }

    /// Limit added words to `max_depth` characters.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Reserve room for `initial_capacity` nodes up front.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
