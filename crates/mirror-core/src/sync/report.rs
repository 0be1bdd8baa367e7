//! Outcome of a synchronization pass

use mirror_fs::NormalizedPath;

/// How a copied file was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyKind {
    /// New file, or an existing one whose content changed
    Added,
    /// New file whose content already existed elsewhere under the destination root
    Duplicate {
        /// Matching file, relative to the destination root
        of: NormalizedPath,
    },
    /// Target already held identical bytes
    Unchanged,
}

/// A file copied during the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    /// Path relative to the source root
    pub path: NormalizedPath,
    pub kind: CopyKind,
}

/// Where a failure was contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureScope {
    /// A single file could not be hashed or copied; its siblings continued
    File,
    /// A directory level was abandoned; its parent continued
    Directory,
}

/// A contained failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub scope: FailureScope,
    /// Source path being processed when the failure occurred
    pub path: NormalizedPath,
    pub message: String,
}

/// Report from one synchronization pass
///
/// Failures are contained where they occur and never abort the pass; this
/// report is how callers observe them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Deleted destination files, relative to the destination root
    pub deleted: Vec<NormalizedPath>,
    /// Copied files in the order they were written
    pub copied: Vec<CopiedFile>,
    /// Directory levels that completed
    pub synced_dirs: usize,
    /// Contained failures
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    /// True when nothing failed during the pass.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Copies that were not byte-identical to what the destination held.
    pub fn changed(&self) -> impl Iterator<Item = &CopiedFile> {
        self.copied
            .iter()
            .filter(|copied| copied.kind != CopyKind::Unchanged)
    }

    /// Copies detected as content duplicates.
    pub fn duplicates(&self) -> impl Iterator<Item = &CopiedFile> {
        self.copied
            .iter()
            .filter(|copied| matches!(copied.kind, CopyKind::Duplicate { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copied(path: &str, kind: CopyKind) -> CopiedFile {
        CopiedFile {
            path: NormalizedPath::new(path),
            kind,
        }
    }

    #[test]
    fn empty_report_is_success() {
        assert!(SyncReport::default().is_success());
    }

    #[test]
    fn report_with_failure_is_not_success() {
        let report = SyncReport {
            failures: vec![SyncFailure {
                scope: FailureScope::File,
                path: NormalizedPath::new("a.txt"),
                message: "boom".into(),
            }],
            ..SyncReport::default()
        };
        assert!(!report.is_success());
    }

    #[test]
    fn changed_skips_unchanged_copies() {
        let report = SyncReport {
            copied: vec![
                copied("a.txt", CopyKind::Unchanged),
                copied("b.txt", CopyKind::Added),
                copied(
                    "c.txt",
                    CopyKind::Duplicate {
                        of: NormalizedPath::new("b.txt"),
                    },
                ),
            ],
            ..SyncReport::default()
        };

        let changed: Vec<&str> = report.changed().map(|c| c.path.as_str()).collect();
        assert_eq!(changed, vec!["b.txt", "c.txt"]);

        let duplicates: Vec<&str> = report.duplicates().map(|c| c.path.as_str()).collect();
        assert_eq!(duplicates, vec!["c.txt"]);
    }
}
