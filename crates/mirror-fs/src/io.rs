//! Copy and delete primitives

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::{Error, Result};

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Delete a single file.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}

/// Copy `source` over `target`, replacing any existing file.
///
/// The bytes are written to a temp file next to `target` under an exclusive
/// lock, flushed, then renamed into place. Readers of `target` see either the
/// old file or the complete new one. The temp file is removed if any step
/// fails.
pub fn copy_atomic(source: &Path, target: &Path) -> Result<()> {
    let file_name = target.file_name().ok_or_else(|| Error::NoFileName {
        path: target.to_path_buf(),
    })?;
    let temp_path = target.with_file_name(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    let result = write_temp(source, &temp_path, target)
        .and_then(|()| fs::rename(&temp_path, target).map_err(|e| Error::io(target, e)));

    if result.is_err() && temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!(path = %temp_path.display(), error = %e, "failed to remove temp file");
        }
    }
    result
}

fn write_temp(source: &Path, temp_path: &Path, target: &Path) -> Result<()> {
    let mut reader = File::open(source).map_err(|e| Error::io(source, e))?;

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    std::io::copy(&mut reader, &mut temp_file).map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    // Released on drop too, but the rename should see an unlocked file.
    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    Ok(())
}
