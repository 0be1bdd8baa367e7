//! Partially specified configuration from one source

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::resolved::{DEFAULT_INTERVAL_SECS, DEFAULT_LOG_FILE, SyncConfig};
use crate::{Error, Result};

/// Settings from a single source, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    /// Source root
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Destination root
    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Seconds between passes
    #[serde(default)]
    pub interval: Option<u64>,

    /// Event log path
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl PartialConfig {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML content; `path` is used for error messages only.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Layer `overrides` on top of `self`. Fields set in `overrides` win.
    pub fn merge(self, overrides: PartialConfig) -> Self {
        Self {
            source: overrides.source.or(self.source),
            destination: overrides.destination.or(self.destination),
            interval: overrides.interval.or(self.interval),
            log_file: overrides.log_file.or(self.log_file),
        }
    }

    /// Fill in defaults and require source and destination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] if source or destination is unset.
    pub fn resolve(self) -> Result<SyncConfig> {
        let source = self.source.ok_or(Error::MissingSetting { name: "source" })?;
        let destination = self
            .destination
            .ok_or(Error::MissingSetting { name: "destination" })?;

        Ok(SyncConfig {
            source,
            destination,
            interval: Duration::from_secs(self.interval.unwrap_or(DEFAULT_INTERVAL_SECS)),
            log_file: self
                .log_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }
}
