//! Error types for mcp-catalog

use std::path::PathBuf;

/// Result type for mcp-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a registry document.
///
/// Unlike the scope files managed by `mcp-config`, a broken registry
/// document is a real error: the catalog is the source the user browses,
/// and silently treating it as empty would hide every server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse registry document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
