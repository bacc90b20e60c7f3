//! Atomic manifest writes.
//!
//! 1. Ensure the parent directory exists.
//! 2. Write to `<path>.tmp`.
//! 3. Rename to the final path (atomic on POSIX); remove the `.tmp` on failure.
//!
//! Output is always fully replaced, never appended.

use std::path::{Path, PathBuf};

use crate::error::{io_err, PipelineError};

/// Create `dir` and its parents; an existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<(), PipelineError> {
    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))
}

pub fn atomic_write(path: &Path, content: &str) -> Result<(), PipelineError> {
    let tmp = PathBuf::from(format!("{}.tmp", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::debug!("wrote: {}", path.display());
    Ok(())
}
