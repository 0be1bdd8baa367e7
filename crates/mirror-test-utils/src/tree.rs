//! [`TestTree`] builder for mirroring scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Which half of the fixture a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

/// A temporary `src/` + `dst/` pair with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use mirror_test_utils::{Side, TestTree};
///
/// let tree = TestTree::new();
/// tree.write(Side::Source, "a/notes.txt", "hello");
/// tree.write(Side::Destination, "stale.txt", "old");
/// assert_eq!(tree.read(Side::Source, "a/notes.txt"), "hello");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create the fixture with an empty source directory.
    ///
    /// The destination directory is not created; the first sync creates it.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        Self { temp_dir }
    }

    /// Root of the temporary directory holding both halves.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self) -> PathBuf {
        self.root().join("src")
    }

    pub fn destination(&self) -> PathBuf {
        self.root().join("dst")
    }

    /// Absolute path of `rel` on `side`.
    pub fn path(&self, side: Side, rel: &str) -> PathBuf {
        let base = match side {
            Side::Source => self.source(),
            Side::Destination => self.destination(),
        };
        if rel.is_empty() { base } else { base.join(rel) }
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, side: Side, rel: &str, content: &str) -> PathBuf {
        let path = self.path(side, rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Create the directory `rel` and its parents.
    pub fn mkdir(&self, side: Side, rel: &str) -> PathBuf {
        let path = self.path(side, rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Read `rel` as a string.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, side: Side, rel: &str) -> String {
        let path = self.path(side, rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Names of the regular files directly inside `rel`.
    pub fn file_names(&self, side: Side, rel: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path(side, rel))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Every file under `side` keyed by forward-slash relative path.
    pub fn snapshot(&self, side: Side) -> BTreeMap<String, String> {
        let mut files = BTreeMap::new();
        let base = self.path(side, "");
        collect(&base, &base, &mut files);
        files
    }

    /// Assert that `rel` exists on `side`.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, side: Side, rel: &str) {
        let path = self.path(side, rel);
        assert!(path.exists(), "Expected path to exist: {}", path.display());
    }

    /// Assert that `rel` does **not** exist on `side`.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, side: Side, rel: &str) {
        let path = self.path(side, rel);
        assert!(
            !path.exists(),
            "Expected path NOT to exist: {}",
            path.display()
        );
    }
}

fn collect(base: &Path, dir: &Path, files: &mut BTreeMap<String, String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            collect(base, &path, files);
        } else {
            let rel = path
                .strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            let content = fs::read_to_string(&path).unwrap_or_default();
            files.insert(rel, content);
        }
    }
}
