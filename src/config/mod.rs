//! Configuration module for the Kukui Trie crate.
//!
//! This module provides a layered configuration system that starts from
//! defaults, merges an optional file (TOML, YAML, JSON) and then applies
//! environment variable overrides. The result is validated before use.

use std::path::{Path, PathBuf};

use crate::data_structures::kukui_trie::{TrieConfig, MAX_INITIAL_CAPACITY};
use crate::error::config::ConfigError;
use crate::error::KukuiResult;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KUKUI";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the Kukui Trie crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KukuiConfig {
    /// Trie configuration
    pub trie: TrieConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl KukuiConfig {
    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializationError(e.to_string()))
    }

    /// Writes the configuration as TOML to `path`, creating parent directories.
    pub fn write_toml<P: AsRef<Path>>(&self, path: P) -> KukuiResult<()> {
        let path = path.as_ref();
        let toml = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml)?;

        tracing::info!(?path, "Configuration written");
        Ok(())
    }
}

impl Validate for KukuiConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_depth must be greater than 0".to_string(),
            ));
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::ValidationError(format!(
                "initial_capacity must be at most {MAX_INITIAL_CAPACITY}, got {}",
                self.initial_capacity
            )));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the Kukui Trie crate.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// Environment keys take the form `<PREFIX>__<SECTION>__<KEY>`, for
    /// example `KUKUI__TRIE__MAX_DEPTH=32`.
    ///
    /// # Returns
    ///
    /// * `Ok(KukuiConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<KukuiConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&KukuiConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                tracing::warn!(?path, "Configuration file not found");
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let kukui_config: KukuiConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        kukui_config.validate()?;
        tracing::debug!(?kukui_config, "Loaded configuration");

        Ok(kukui_config)
    }
}
