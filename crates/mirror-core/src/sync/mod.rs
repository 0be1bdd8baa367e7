//! One-way tree synchronization
//!
//! - **engine**: [`TreeSynchronizer`] reconciles a destination tree with a source tree
//! - **report**: [`SyncReport`] records what a pass did and what failed

mod engine;
mod report;

pub use engine::TreeSynchronizer;
pub use report::{CopiedFile, CopyKind, FailureScope, SyncFailure, SyncReport};
