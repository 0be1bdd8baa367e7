//! Path display helpers
//!
//! Event messages name files relative to the root they live under, always
//! with forward slashes so log lines read the same on every platform.

use std::path::Path;

/// A path rendered with forward slashes, used only for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Display `path` relative to `root`.
///
/// Paths outside `root` are displayed in full.
pub fn relative_display(root: &Path, path: &Path) -> NormalizedPath {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => NormalizedPath::new(rel),
        _ => NormalizedPath::new(path),
    }
}
