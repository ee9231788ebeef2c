//! Engine configuration: traversal tuning, cache watermarks, and debug
//! switches, persisted as RON.
//!
//! Settings are validated on every load and save so a bad file is rejected
//! at startup instead of wedging the cache or the traversal at first use.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tilestream_cache::LruCacheConfig;
use tilestream_core::TraversalConfig;

use crate::error::ConfigError;

/// Name of the config file inside the config directory.
const FILE_NAME: &str = "tilestream.ron";

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Traversal tuning (error budget, depth cutoff, sibling loading).
    pub traversal: TraversalConfig,
    /// Content cache watermarks.
    pub cache: LruCacheConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from `dir`, writing a default file first if
    /// none exists yet.
    pub fn load_or_create(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::file_path(dir);
        if !path.exists() {
            let config = Config::default();
            config.save(dir)?;
            tracing::info!(path = %path.display(), "wrote default config");
            return Ok(config);
        }

        let config = Self::read(&path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the configuration to `dir`, creating the directory if needed.
    /// Refuses to persist settings that fail [`validate`](Self::validate).
    pub fn save(&self, dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = Self::file_path(dir);
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(&path, text).map_err(|source| ConfigError::Io { path, source })?;
        Ok(())
    }

    /// Pick up external edits: re-read the file and return the new settings
    /// if they differ from `self`.
    pub fn reload(&self, dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = Self::read(&Self::file_path(dir))?;
        if fresh == *self {
            return Ok(None);
        }
        tracing::info!("config changed on disk");
        Ok(Some(fresh))
    }

    /// Reject settings no engine run could make sense of.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.min_items > self.cache.max_items {
            return Err(ConfigError::Invalid(format!(
                "cache min_items ({}) exceeds max_items ({})",
                self.cache.min_items, self.cache.max_items
            )));
        }
        if self.traversal.error_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "error_threshold must be positive, got {}",
                self.traversal.error_threshold
            )));
        }
        Ok(())
    }

    fn file_path(dir: &Path) -> PathBuf {
        dir.join(FILE_NAME)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = ron::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}
