//! Sync configuration
//!
//! Settings come from an optional TOML file and from command-line flags.
//! Both produce a [`PartialConfig`]; flags are merged over the file and the
//! result is resolved into a complete [`SyncConfig`] with defaults applied.
//!
//! ```toml
//! source = "/srv/data"
//! destination = "/mnt/backup/data"
//! interval = 300
//! log_file = "/var/log/dirmirror.log"
//! ```

mod partial;
mod resolved;

pub use partial::PartialConfig;
pub use resolved::{DEFAULT_INTERVAL_SECS, DEFAULT_LOG_FILE, SyncConfig};
