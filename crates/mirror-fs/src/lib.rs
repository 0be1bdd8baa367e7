//! Filesystem layer for dirmirror
//!
//! Provides directory listing, content digests, and the copy/delete
//! primitives the synchronizer is built on.

pub mod checksum;
pub mod error;
pub mod io;
pub mod listing;
pub mod path;

pub use checksum::ContentDigest;
pub use error::{Error, Result};
pub use listing::{Entry, EntryKind};
pub use path::{NormalizedPath, relative_display};
