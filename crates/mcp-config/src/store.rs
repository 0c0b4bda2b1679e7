//! Read-modify-write operations on one scope file's `mcpServers` mapping.
//!
//! Reads are tolerant: a missing, empty, or unparseable file is an empty
//! document, never an error. Writes are strict: directory creation and the
//! final write surface [`Error::WriteFailure`]. A lost write must not pass
//! silently.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::PoisonError;

use serde_json::{Map, Value, json};

use crate::entry::ServerEntry;
use crate::error::{Error, Result};
use crate::io::{path_lock, write_atomic};
use crate::scope::Scope;

/// Top-level JSON key holding the server mapping.
pub const SERVERS_KEY: &str = "mcpServers";

/// Manages server entries in the config file backing one scope.
///
/// Each operation is a fresh read-modify-write against the file; nothing is
/// cached between calls.
#[derive(Debug)]
pub struct ConfigStore {
    scope: Scope,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the given scope.
    ///
    /// Resolution happens here, so `InvalidScope`-adjacent failures
    /// ([`Error::MissingProjectRoot`], [`Error::HomeDirNotFound`]) fail fast
    /// before any operation runs.
    pub fn new(scope: Scope, project_root: Option<&Path>) -> Result<Self> {
        let path = scope.resolve(project_root)?;
        Ok(Self { scope, path })
    }

    /// The scope this store is bound to.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The resolved config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Read the scope file as a JSON document.
    ///
    /// Missing file, empty content, and unparseable JSON all yield an empty
    /// document. A parse failure is logged; the next write replaces the
    /// corrupt file wholesale.
    fn read_document(&self) -> Value {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return json!({}),
        };
        if content.trim().is_empty() {
            return json!({});
        }
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "ignoring unparseable scope file"
                );
                json!({})
            }
        }
    }

    /// Serialize with 2-space indentation and write whole-file.
    fn write_document(&self, document: &Value) -> Result<()> {
        let content = serde_json::to_string_pretty(document)
            .map_err(|e| Error::write_failure(&self.path, std::io::Error::other(e)))?;
        write_atomic(&self.path, content.as_bytes())?;
        tracing::debug!(path = %self.path.display(), scope = %self.scope, "wrote scope file");
        Ok(())
    }

    /// Get the servers map from a document, if present.
    fn servers(document: &Value) -> Option<&Map<String, Value>> {
        document.get(SERVERS_KEY)?.as_object()
    }

    /// Get or create a mutable servers map within the document.
    ///
    /// A non-object root is replaced with `{}`, and a servers value that is
    /// present but not an object (an array, a number) is replaced the same
    /// way; sibling keys of an object root are left alone.
    fn servers_mut(document: &mut Value) -> &mut Map<String, Value> {
        if !document.is_object() {
            *document = json!({});
        }
        let root = document.as_object_mut().unwrap();
        if !root.get(SERVERS_KEY).map_or(false, Value::is_object) {
            root.insert(SERVERS_KEY.to_string(), json!({}));
        }
        root[SERVERS_KEY].as_object_mut().unwrap()
    }

    // -----------------------------------------------------------------------
    // Public API
    // -----------------------------------------------------------------------

    /// Install a server entry, overwriting any prior value for its id.
    ///
    /// Installing the same entry twice yields the same file content; a
    /// different config under the same id wins over the previous one.
    pub fn install(&self, entry: &ServerEntry) -> Result<()> {
        let lock = path_lock(&self.path);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut document = self.read_document();
        let servers = Self::servers_mut(&mut document);
        servers.insert(entry.id.clone(), entry.config.clone());
        self.write_document(&document)
    }

    /// Remove a server entry by id.
    ///
    /// Returns `Ok(true)` if the entry was found and removed, `Ok(false)` if
    /// it was not present. When nothing is removed the file is not rewritten
    /// at all.
    pub fn uninstall(&self, id: &str) -> Result<bool> {
        let lock = path_lock(&self.path);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut document = self.read_document();
        let servers = Self::servers_mut(&mut document);
        let removed = servers.remove(id).is_some();
        if removed {
            self.write_document(&document)?;
        }
        Ok(removed)
    }

    /// List installed server ids.
    ///
    /// Never fails: any read or parse problem yields an empty list. Ordering
    /// is whatever the document holds and is display-only.
    pub fn list(&self) -> Vec<String> {
        let lock = path_lock(&self.path);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let document = self.read_document();
        match Self::servers(&document) {
            Some(servers) => servers.keys().cloned().collect(),
            None => Vec::new(),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
