// Copyright (c) 2025 Kukui Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Kukui Trie.

use std::fmt;

/// The word-level operation that rejected an empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOperation {
    /// Inserting a word.
    Add,
    /// Walking a prefix or looking up an exact word.
    Search,
}

impl WordOperation {
    fn empty_input_message(self) -> &'static str {
        match self {
            WordOperation::Add => "cannot add empty word to trie",
            WordOperation::Search => "cannot search empty word",
        }
    }
}

impl fmt::Display for WordOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordOperation::Add => f.write_str("add"),
            WordOperation::Search => f.write_str("search"),
        }
    }
}

/// Errors that can occur in Kukui Trie operations.
///
/// `NotFound` covers both an absent path and a path that exists but does not
/// end a word. Only a prior `find` tells the two apart.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KukuiTrieError {
    /// An empty word was given to an add or search operation.
    #[error("{}", .operation.empty_input_message())]
    EmptyInput {
        /// The operation that received the empty word.
        operation: WordOperation,
    },

    /// The character path is absent, or the node reached is not a word.
    #[error("word not in trie")]
    NotFound,

    /// The node given for deletion does not currently terminate a word.
    #[error("cannot delete a node if it is not a word")]
    InvalidState,

    /// The word has more characters than the configured maximum depth.
    #[error("word '{word}' exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// The rejected word.
        word: String,
        /// The configured maximum depth.
        max_depth: usize,
    },
}

impl KukuiTrieError {
    pub(crate) fn empty_add() -> Self {
        KukuiTrieError::EmptyInput {
            operation: WordOperation::Add,
        }
    }

    pub(crate) fn empty_search() -> Self {
        KukuiTrieError::EmptyInput {
            operation: WordOperation::Search,
        }
    }
}

/// Result type for Kukui Trie operations
pub type KukuiTrieResult<T> = std::result::Result<T, KukuiTrieError>;
