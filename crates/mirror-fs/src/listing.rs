//! Directory listing
//!
//! Entries are classified by following symlinks. An entry whose metadata
//! cannot be read fails the whole listing.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

/// What an entry was observed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// List the immediate children of `dir`, sorted by name.
///
/// Anything that is not a directory is reported as a file.
pub fn list_entries(dir: &Path) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut entries = Vec::new();
    for item in read_dir {
        let item = item.map_err(|e| Error::io(dir, e))?;
        let path = item.path();
        let metadata = fs::metadata(&path).map_err(|e| Error::io(&path, e))?;
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(Entry {
            name: item.file_name(),
            path,
            kind,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Names of the immediate (non-recursive) files in `dir`.
pub fn list_file_names(dir: &Path) -> Result<BTreeSet<OsString>> {
    Ok(list_entries(dir)?
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::File)
        .map(|entry| entry.name)
        .collect())
}

/// Every file under `root`, recursively, in file-name order.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
