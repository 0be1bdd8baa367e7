//! The mirroring loop
//!
//! Resolves settings from the config file and flags, opens the event log,
//! and hands both to the driver.

use mirror_core::{Driver, LogFileReporter, PartialConfig, SyncConfig};
use tracing::{debug, info};

use crate::cli::{Cli, USAGE};
use crate::error::Result;

/// Merge the config file (if any) with flags.
///
/// Returns `None` when source or destination is missing from both.
pub fn resolve_config(cli: &Cli) -> Result<Option<SyncConfig>> {
    let file = match &cli.config {
        Some(path) => PartialConfig::load(path)?,
        None => PartialConfig::default(),
    };

    match file.merge(cli.overrides()).resolve() {
        Ok(config) => {
            config.validate()?;
            Ok(Some(config))
        }
        Err(mirror_core::Error::MissingSetting { name }) => {
            debug!(setting = name, "required setting missing");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the mirror until the pass limit is reached or a fatal error occurs.
///
/// Prints the usage line and returns successfully when source or
/// destination is missing.
pub fn run_mirror(cli: &Cli) -> Result<()> {
    let Some(config) = resolve_config(cli)? else {
        println!("{USAGE}");
        return Ok(());
    };

    info!(
        source = %config.source.display(),
        destination = %config.destination.display(),
        interval_secs = config.interval.as_secs(),
        log_file = %config.log_file.display(),
        "starting mirror"
    );

    let mut reporter = LogFileReporter::open(&config.log_file)?;
    let driver = Driver::new(config);
    let passes = driver.run(&mut reporter, cli.max_passes())?;

    debug!(passes, "mirror loop finished");
    Ok(())
}
