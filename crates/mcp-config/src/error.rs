//! Error types for mcp-config

use std::path::PathBuf;

/// Result type for mcp-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mcp-config operations
///
/// Read-side conditions (missing file, unparseable JSON) are deliberately
/// absent: the store treats them as an empty document instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown scope '{value}' (expected project, local, user, or global)")]
    InvalidScope { value: String },

    #[error("Scope '{scope}' requires a project root")]
    MissingProjectRoot { scope: crate::Scope },

    #[error("Could not determine the user home directory")]
    HomeDirNotFound,

    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
