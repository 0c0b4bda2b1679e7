//! Append-once guard for a project's ignore-list file.
//!
//! Project-scope installs write `.mcp.json` into the repository; the guard
//! keeps that file out of version control by appending the entry to
//! `<root>/.gitignore` exactly once.

use std::fs;
use std::path::Path;
use std::sync::PoisonError;

use crate::error::Result;
use crate::io::{path_lock, write_atomic};

/// Ignore-list file, relative to the project root.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Comment line written above a newly appended entry.
const ENTRY_COMMENT: &str = "# MCP configuration";

/// Ensure `entry` appears as a literal line in `<project_root>/.gitignore`.
///
/// Matching is exact-string on trimmed lines, not glob-aware: a `*.json`
/// pattern that would already ignore the file does NOT count, and the
/// literal entry is still appended. This mirrors how existing installs
/// detect the entry; do not widen it to pattern matching.
///
/// A missing or unreadable file is treated as empty content. When the entry
/// is absent the file is rewritten as the trimmed existing content followed
/// by a blank line, a comment line, and the entry; when present no write
/// occurs at all. Returns `Ok(true)` iff the file was written.
pub fn ensure_entry(project_root: &Path, entry: &str) -> Result<bool> {
    let path = project_root.join(GITIGNORE_FILE);
    let lock = path_lock(&path);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

    let content = fs::read_to_string(&path).unwrap_or_default();

    let present = content.lines().any(|line| line.trim() == entry);
    if present {
        tracing::debug!(path = %path.display(), entry, "ignore entry already present");
        return Ok(false);
    }

    let new_content = format!("{}\n\n{ENTRY_COMMENT}\n{entry}\n", content.trim());
    write_atomic(&path, new_content.as_bytes())?;
    tracing::debug!(path = %path.display(), entry, "appended ignore entry");
    Ok(true)
}

// ===========================================================================
// Tests
// ===========================================================================
