//! Test modules for the Kukui Trie crate.
//!
//! This module contains the cross-cutting test suites:
//! - Scenario tests for the trie operations
//! - Property-based tests using proptest
//! - Configuration loading and validation tests
//! - Error conversion and display tests
//!
//! Per-file unit tests live next to the code they exercise.

pub mod error_tests;
