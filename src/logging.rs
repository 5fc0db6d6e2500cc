//! Logging setup for the Kukui Trie crate.
//!
//! Installs a global `tracing` subscriber built from [`LogConfig`]. The
//! `RUST_LOG` environment variable, when set, takes precedence over the
//! configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{KukuiError, KukuiResult};

/// Initialize the logging system.
///
/// Returns an error instead of panicking if a global subscriber is already
/// installed, so calling this more than once is harmless.
pub fn init_logging(config: &LogConfig) -> KukuiResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    result.map_err(|e| KukuiError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}
