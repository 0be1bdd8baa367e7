//! Fully resolved configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result};

/// Pause between passes when none is configured
pub const DEFAULT_INTERVAL_SECS: u64 = 600;

/// Event log path when none is configured
pub const DEFAULT_LOG_FILE: &str = "sync_log.txt";

/// Everything one mirroring process needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub interval: Duration,
    pub log_file: PathBuf,
}

impl SyncConfig {
    /// Config for `source` -> `destination` with default interval and log file.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    /// Reject a destination that equals or sits inside the source.
    ///
    /// Paths are compared lexically after being made absolute; symlinks are
    /// not resolved.
    pub fn validate(&self) -> Result<()> {
        let source = absolute(&self.source)?;
        let destination = absolute(&self.destination)?;

        if destination == source {
            return Err(Error::InvalidConfig {
                message: format!(
                    "source and destination are the same directory: {}",
                    source.display()
                ),
            });
        }
        if destination.starts_with(&source) {
            return Err(Error::InvalidConfig {
                message: format!(
                    "destination {} is inside source {}",
                    destination.display(),
                    source.display()
                ),
            });
        }
        Ok(())
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::InvalidConfig {
        message: format!("cannot resolve path {:?}: {}", path, e),
    })
}
