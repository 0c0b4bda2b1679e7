//! Whole-file writes with rename-into-place semantics, and the per-path
//! lock registry that serializes read-modify-write cycles on one file.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::{Error, Result};

/// Process-wide registry of per-path locks.
///
/// Operations against the same path serialize; distinct paths proceed
/// independently. There is no cross-process locking.
static PATH_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

/// Get the lock guarding the given path, creating it on first use.
pub(crate) fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    let locks = PATH_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = locks.lock().unwrap_or_else(PoisonError::into_inner);
    map.entry(path.to_path_buf()).or_default().clone()
}

/// Write content to a file via a temp file in the same directory.
///
/// Creates the parent directory if missing. The final rename makes the write
/// whole-file from a reader's perspective. Every failure along the way maps
/// to [`Error::WriteFailure`] with the offending path.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::write_failure(parent, e))?;
    }

    // Temp file in the same directory so the rename stays on one filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::write_failure(&temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::write_failure(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::write_failure(&temp_path, e))?;

    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| Error::write_failure(path, e))
}
