//! SHA-256 content digests
//!
//! Duplicate detection compares files by the digest of their full contents.
//! Digests display in the canonical `sha256:<hex>` format.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::Path;

use crate::{Error, Result};

/// Prefix for the display form of a digest
const PREFIX: &str = "sha256:";

/// Digest of a file's full byte contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Digest of an in-memory buffer.
    pub fn of_bytes(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self(hasher.finalize().into())
    }

    /// Digest of a file, streamed from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn of_file(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut hasher = Sha256::new();
        std::io::copy(&mut file, &mut hasher).map_err(|e| Error::io(path, e))?;
        Ok(Self(hasher.finalize().into()))
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(PREFIX)?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_display_has_prefix() {
        let digest = ContentDigest::of_bytes(b"hello world");
        assert!(digest.to_string().starts_with("sha256:"));
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(ContentDigest::of_bytes(b"test"), ContentDigest::of_bytes(b"test"));
    }

    #[test]
    fn different_content_different_digest() {
        assert_ne!(ContentDigest::of_bytes(b"aaa"), ContentDigest::of_bytes(b"bbb"));
    }

    #[test]
    fn digest_known_value() {
        let digest = ContentDigest::of_bytes(b"hello world");
        assert_eq!(
            digest.to_string(),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn file_digest_matches_bytes_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        std::fs::write(&path, "hello world").unwrap();

        let from_file = ContentDigest::of_file(&path).unwrap();
        assert_eq!(from_file, ContentDigest::of_bytes(b"hello world"));
    }

    #[test]
    fn empty_file_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        std::fs::write(&path, "").unwrap();

        assert_eq!(
            ContentDigest::of_file(&path).unwrap(),
            ContentDigest::of_bytes(b"")
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = ContentDigest::of_file(&path).unwrap_err();
        assert_eq!(err.path(), path.as_path());
    }
}
