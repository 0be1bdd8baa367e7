//! Content hashing used for duplicate detection

use std::path::Path;

use mirror_fs::ContentDigest;

/// Computes a digest from a file's full contents.
pub trait ContentHasher {
    fn digest(&self, path: &Path) -> mirror_fs::Result<ContentDigest>;
}

/// SHA-256 over the streamed file contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    fn digest(&self, path: &Path) -> mirror_fs::Result<ContentDigest> {
        ContentDigest::of_file(path)
    }
}

impl<H: ContentHasher + ?Sized> ContentHasher for &H {
    fn digest(&self, path: &Path) -> mirror_fs::Result<ContentDigest> {
        (**self).digest(path)
    }
}
