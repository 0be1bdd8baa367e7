//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use mirror_core::PartialConfig;

/// Printed when no source or destination was given
pub const USAGE: &str = "Usage: mirror --source <source_folder> --destination <destination_folder> [--interval <interval_in_seconds>] [--file <log_file>]";

/// dirmirror - Periodically mirror one directory tree into another
///
/// Deletes destination files missing from the source, copies new and changed
/// files, and reports copies whose content already exists in the destination.
#[derive(Parser, Debug)]
#[command(name = "mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Source directory to mirror from
    #[arg(long, value_name = "PATH", env = "MIRROR_SOURCE")]
    pub source: Option<PathBuf>,

    /// Destination directory to mirror into
    #[arg(long, value_name = "PATH", env = "MIRROR_DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Seconds to wait between passes [default: 600]
    #[arg(long, value_name = "SECONDS", env = "MIRROR_INTERVAL")]
    pub interval: Option<u64>,

    /// Log file that events are appended to [default: sync_log.txt]
    #[arg(long = "file", value_name = "PATH", env = "MIRROR_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// TOML file with source, destination, interval, and log_file keys
    ///
    /// Flags given on the command line override values from this file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run a single pass and exit
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Settings given as flags, to be layered over the config file.
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            source: self.source.clone(),
            destination: self.destination.clone(),
            interval: self.interval,
            log_file: self.log_file.clone(),
        }
    }

    /// Pass limit for the driver loop.
    pub fn max_passes(&self) -> Option<u64> {
        self.once.then_some(1)
    }
}
