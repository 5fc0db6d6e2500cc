//! Error module for the Kukui Trie crate.
//!
//! Trie operations return [`KukuiTrieError`] directly. This module adds the
//! crate-level [`KukuiError`] that also covers configuration and logging
//! setup, so callers of [`crate::init`] get a single error type.

use thiserror::Error;

pub mod config;

pub use crate::data_structures::kukui_trie::KukuiTrieError;

/// Result type alias used throughout the Kukui Trie crate.
pub type KukuiResult<T> = Result<T, KukuiError>;

/// Core error enum for the Kukui Trie crate.
#[derive(Error, Debug)]
pub enum KukuiError {
    /// Errors returned by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] KukuiTrieError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while writing configuration files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors installing the tracing subscriber.
    #[error("Logging error: {0}")]
    Logging(String),
}
