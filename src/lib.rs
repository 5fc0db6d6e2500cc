//! Kukui Trie Library
//!
//! A character-indexed prefix tree over strings with prefix lookup, exact
//! word lookup, logical deletion and update, plus the configuration and
//! logging setup that applications embedding it need.
//!
//! # Architecture
//!
//! - [`data_structures::kukui_trie`] holds the trie, its nodes and the
//!   thread-safe [`SharedKukuiTrie`] wrapper
//! - [`config`] loads layered configuration from defaults, files and the
//!   environment
//! - [`logging`] installs the `tracing` subscriber
//! - [`error`] collects the crate-level error type
//!
//! # Example
//!
//! ```
//! use kukui_trie::KukuiTrie;
//!
//! let mut trie = KukuiTrie::new();
//! let id = trie.add_word("0813 022 6951").unwrap().id();
//!
//! assert!(trie.find("0813").is_ok());
//! assert!(trie.find_word("0813").is_err());
//!
//! let updated = trie.update_word(id, "0803 951 8636").unwrap();
//! assert_eq!(updated.word(), Some("0803 951 8636"));
//! ```

use std::path::Path;

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::kukui_trie::{
    KukuiTrie, KukuiTrieError, KukuiTrieResult, NodeId, SharedKukuiTrie, TrieConfig, TrieNode,
};

/// Version information for the Kukui Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (if any) and `KUKUI__*` environment
/// variables, then installs the logging subscriber. Returns the loaded
/// configuration so the caller can build tries from `config.trie`.
pub fn init(config_path: Option<&Path>) -> error::KukuiResult<config::KukuiConfig> {
    let config = config::ConfigLoader::new(config_path, config::ENV_PREFIX).load()?;
    logging::init_logging(&config.log)?;
    tracing::info!(version = VERSION, "Kukui trie initialized");
    Ok(config)
}
