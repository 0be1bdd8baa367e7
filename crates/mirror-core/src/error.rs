//! Error types for mirror-core

use std::path::PathBuf;

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mirror-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The reporter could not record an event
    #[error("Failed to write log entry: {source}")]
    Report {
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the expected schema
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A required setting was supplied by neither flags nor config file
    #[error("Missing required setting: {name}")]
    MissingSetting { name: &'static str },

    /// Settings are present but unusable together
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Filesystem error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),
}

impl Error {
    /// Whether the error must stop the sync loop.
    ///
    /// Filesystem errors are contained at the file or directory that raised
    /// them. An unwritable event log is not.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Report { .. })
    }
}
