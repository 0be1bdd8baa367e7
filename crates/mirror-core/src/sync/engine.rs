//! TreeSynchronizer implementation
//!
//! A pass walks the source tree depth-first. At each directory level the
//! destination's stale files are deleted first, then every source entry is
//! either recursed into or copied. Failures are contained at the file or
//! directory level that raised them and recorded in the [`SyncReport`].

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fmt::Display;
use std::path::Path;

use mirror_fs::{EntryKind, NormalizedPath, io, listing, relative_display};
use tracing::{debug, warn};

use super::report::{CopiedFile, CopyKind, FailureScope, SyncFailure, SyncReport};
use crate::Result;
use crate::hasher::{ContentHasher, Sha256Hasher};
use crate::reporter::Reporter;

/// Mirrors a source tree into a destination tree.
///
/// Every regular file in the source is copied over its destination
/// counterpart, and destination files with no source counterpart at the same
/// level are deleted. Destination-only directories are left alone.
///
/// When a new file's content already exists anywhere under the destination
/// root, the copy is reported as a duplicate of that file. The copy still
/// happens.
#[derive(Debug, Clone, Default)]
pub struct TreeSynchronizer<H = Sha256Hasher> {
    hasher: H,
}

impl TreeSynchronizer {
    /// Create a synchronizer using SHA-256 content digests.
    pub fn new() -> Self {
        Self::default()
    }
}

/// State carried through one pass
struct Pass<'a> {
    source_root: &'a Path,
    dest_root: &'a Path,
    reporter: &'a mut dyn Reporter,
    report: SyncReport,
}

impl Pass<'_> {
    fn emit(&mut self, message: &str) -> Result<()> {
        self.reporter.report(message)
    }

    fn fail(&mut self, scope: FailureScope, path: &Path, error: &dyn Display) {
        self.report.failures.push(SyncFailure {
            scope,
            path: relative_display(self.source_root, path),
            message: error.to_string(),
        });
    }
}

impl<H: ContentHasher> TreeSynchronizer<H> {
    /// Create a synchronizer with a custom content hasher.
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Run one pass reconciling `destination` with `source`.
    ///
    /// `destination` is created if missing. Filesystem errors never escape:
    /// they are reported as events and collected in the returned report.
    ///
    /// # Errors
    ///
    /// Only reporter failures are returned. They abort the pass immediately.
    pub fn sync(
        &self,
        source: &Path,
        destination: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport> {
        let mut pass = Pass {
            source_root: source,
            dest_root: destination,
            reporter,
            report: SyncReport::default(),
        };
        self.sync_dir(&mut pass, source, destination)?;
        Ok(pass.report)
    }

    fn sync_dir(&self, pass: &mut Pass<'_>, source: &Path, destination: &Path) -> Result<()> {
        match self.sync_level(pass, source, destination) {
            Ok(()) => {
                pass.report.synced_dirs += 1;
                pass.emit(&format!(
                    "Folder synced: {} to {}",
                    NormalizedPath::new(source),
                    NormalizedPath::new(destination)
                ))
            }
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!(source = %source.display(), error = %e, "directory sync abandoned");
                pass.fail(FailureScope::Directory, source, &e);
                pass.emit(&format!("An error occurred: {e}"))
            }
        }
    }

    fn sync_level(&self, pass: &mut Pass<'_>, source: &Path, destination: &Path) -> Result<()> {
        io::ensure_dir(destination)?;

        let entries = listing::list_entries(source)?;
        let source_files: BTreeSet<&OsStr> = entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::File)
            .map(|entry| entry.name.as_os_str())
            .collect();

        // Deletions must land before any copy at this level.
        for name in listing::list_file_names(destination)? {
            if source_files.contains(name.as_os_str()) {
                continue;
            }
            let stale = destination.join(&name);
            io::remove_file(&stale)?;
            let rel = relative_display(pass.dest_root, &stale);
            pass.emit(&format!("{rel} has been deleted"))?;
            pass.report.deleted.push(rel);
        }

        for entry in &entries {
            match entry.kind {
                EntryKind::Directory => {
                    self.sync_dir(pass, &entry.path, &destination.join(&entry.name))?
                }
                EntryKind::File => self.copy_file(pass, &entry.path, destination)?,
            }
        }

        Ok(())
    }

    fn copy_file(&self, pass: &mut Pass<'_>, source: &Path, dest_dir: &Path) -> Result<()> {
        let rel = relative_display(pass.source_root, source);

        match self.try_copy(pass.dest_root, source, dest_dir) {
            Ok(kind) => {
                match &kind {
                    CopyKind::Added => pass.emit(&format!("{rel} added/updated"))?,
                    CopyKind::Duplicate { of } => {
                        pass.emit(&format!("{rel} added as a copy of {of}"))?
                    }
                    CopyKind::Unchanged => debug!(path = %rel, "content unchanged"),
                }
                pass.report.copied.push(CopiedFile { path: rel, kind });
                Ok(())
            }
            Err(e) => {
                warn!(source = %source.display(), error = %e, "file copy failed");
                pass.fail(FailureScope::File, source, &e);
                pass.emit(&format!("Error copying file: {e}"))
            }
        }
    }

    /// Hash, scan the whole destination root for matches, then copy.
    fn try_copy(
        &self,
        dest_root: &Path,
        source: &Path,
        dest_dir: &Path,
    ) -> mirror_fs::Result<CopyKind> {
        let name = source.file_name().ok_or_else(|| mirror_fs::Error::NoFileName {
            path: source.to_path_buf(),
        })?;
        let target = dest_dir.join(name);
        let source_digest = self.hasher.digest(source)?;
        let target_exists = target.is_file();

        let mut unchanged = false;
        let mut duplicate_of = None;
        for candidate in listing::walk_files(dest_root)? {
            if self.hasher.digest(&candidate)? != source_digest {
                continue;
            }
            if candidate == target {
                unchanged = true;
            } else if !target_exists && duplicate_of.is_none() {
                debug!(
                    source = %source.display(),
                    duplicate_of = %candidate.display(),
                    "content already present under destination"
                );
                duplicate_of = Some(relative_display(dest_root, &candidate));
            }
        }

        io::copy_atomic(source, &target)?;

        Ok(match duplicate_of {
            _ if unchanged => CopyKind::Unchanged,
            Some(of) => CopyKind::Duplicate { of },
            None => CopyKind::Added,
        })
    }
}
