//! Tree synchronization engine for dirmirror
//!
//! This crate implements one-way mirroring of a source directory tree into a
//! destination tree:
//!
//! - **TreeSynchronizer**: deletes stale destination files, copies source files,
//!   and classifies copies that duplicate existing destination content
//! - **Reporter**: sink for the human-readable event lines a pass emits
//! - **Configuration**: TOML + flag merge into a [`SyncConfig`]
//! - **Driver**: runs a pass every interval
//!
//! # Architecture
//!
//! ```text
//!        mirror-cli
//!            |
//!       mirror-core
//!            |
//!        mirror-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use mirror_core::{MemoryReporter, TreeSynchronizer};
//! use std::path::Path;
//!
//! let mut reporter = MemoryReporter::new();
//! let report = TreeSynchronizer::new()
//!     .sync(Path::new("src"), Path::new("backup"), &mut reporter)
//!     .unwrap();
//! assert!(report.is_success());
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod hasher;
pub mod reporter;
pub mod sync;

pub use config::{PartialConfig, SyncConfig};
pub use driver::Driver;
pub use error::{Error, Result};
pub use hasher::{ContentHasher, Sha256Hasher};
pub use reporter::{LogFileReporter, MemoryReporter, Reporter};
pub use sync::{CopiedFile, CopyKind, FailureScope, SyncFailure, SyncReport, TreeSynchronizer};
