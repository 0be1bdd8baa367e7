//! Periodic pass loop

use std::thread;

use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::hasher::{ContentHasher, Sha256Hasher};
use crate::reporter::Reporter;
use crate::sync::{SyncReport, TreeSynchronizer};
use crate::Result;

/// Runs one synchronization pass per interval.
///
/// The sleep between passes is a plain blocking sleep on the calling thread.
/// The loop ends only when the pass limit is reached or a fatal error
/// (an unwritable event log) occurs.
#[derive(Debug, Clone)]
pub struct Driver<H = Sha256Hasher> {
    config: SyncConfig,
    synchronizer: TreeSynchronizer<H>,
}

impl Driver {
    pub fn new(config: SyncConfig) -> Self {
        Self::with_synchronizer(config, TreeSynchronizer::new())
    }
}

impl<H: ContentHasher> Driver<H> {
    pub fn with_synchronizer(config: SyncConfig, synchronizer: TreeSynchronizer<H>) -> Self {
        Self {
            config,
            synchronizer,
        }
    }

    /// Run a single pass.
    pub fn run_pass(&self, reporter: &mut dyn Reporter) -> Result<SyncReport> {
        let report =
            self.synchronizer
                .sync(&self.config.source, &self.config.destination, reporter)?;

        info!(
            deleted = report.deleted.len(),
            copied = report.changed().count(),
            duplicates = report.duplicates().count(),
            dirs = report.synced_dirs,
            "sync pass finished"
        );
        if !report.is_success() {
            warn!(failures = report.failures.len(), "sync pass had failures");
        }
        Ok(report)
    }

    /// Run passes until `max_passes` is reached, or forever when `None`.
    ///
    /// Returns the number of passes run.
    pub fn run(&self, reporter: &mut dyn Reporter, max_passes: Option<u64>) -> Result<u64> {
        let mut passes = 0;
        loop {
            if max_passes.is_some_and(|max| passes >= max) {
                return Ok(passes);
            }
            self.run_pass(reporter)?;
            passes += 1;
            if max_passes.is_some_and(|max| passes >= max) {
                return Ok(passes);
            }
            thread::sleep(self.config.interval);
        }
    }
}
