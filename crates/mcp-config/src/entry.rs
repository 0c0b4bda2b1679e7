//! The unit of installation: a named, opaque server configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single MCP server definition as it is installed into a scope file.
///
/// The `config` value (command, arguments, environment variables, whatever
/// else the producing registry carries) is stored and returned verbatim.
/// This layer never validates its shape; callers that need structure impose
/// it on their side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Unique identifier within one scope file. Last write wins.
    pub id: String,
    /// Opaque configuration blob written under `mcpServers.<id>`.
    pub config: Value,
}

impl ServerEntry {
    pub fn new(id: impl Into<String>, config: Value) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }
}
