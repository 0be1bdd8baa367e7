//! Shared test utilities for the dirmirror workspace.
//!
//! This crate provides standardised fixtures so the crate test suites don't
//! each hand-roll temp directory setup. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for a source/destination pair

pub mod tree;

pub use tree::{Side, TestTree};
