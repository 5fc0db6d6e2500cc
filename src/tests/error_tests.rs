//! Tests for the error module.
//!
//! This module contains tests for error conversion and display.

use crate::config::KukuiConfig;
use crate::data_structures::kukui_trie::{KukuiTrie, KukuiTrieError};
use crate::error::config::ConfigError;
use crate::error::{KukuiError, KukuiResult};

fn lookup(trie: &KukuiTrie, word: &str) -> KukuiResult<String> {
    let node = trie.find_word(word)?;
    Ok(node.word().unwrap_or_default().to_string())
}

/// Test that trie errors convert into the crate error with `?`.
#[test]
fn test_trie_error_conversion() {
    let trie = KukuiTrie::new();
    let err = lookup(&trie, "missing").unwrap_err();

    assert!(matches!(err, KukuiError::Trie(KukuiTrieError::NotFound)));
    assert_eq!(err.to_string(), "Trie error: word not in trie");
}

/// Test that nested configuration errors keep their message.
#[test]
fn test_config_error_conversion() {
    let err: KukuiError = ConfigError::ValidationError("bad level".to_string()).into();

    let error_string = format!("{err}");
    assert!(error_string.starts_with("Configuration error:"));
    assert!(error_string.contains("bad level"));
}

/// Test that successful lookups pass through the crate result type.
#[test]
fn test_successful_lookup() {
    let mut trie = KukuiTrie::new();
    trie.add_word("mele").unwrap();

    assert_eq!(lookup(&trie, "mele").unwrap(), "mele");
}

/// Test that IO failures while writing configuration surface as `Io`.
#[test]
fn test_io_error_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    // The parent "directory" is a regular file, so creating it fails
    let err = KukuiConfig::default()
        .write_toml(blocker.join("kukui.toml"))
        .unwrap_err();

    assert!(matches!(err, KukuiError::Io(_)));
    assert!(err.to_string().starts_with("IO error:"));
}
