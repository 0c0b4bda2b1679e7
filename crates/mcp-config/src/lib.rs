//! Scoped MCP server configuration files for MCP Manager.
//!
//! An MCP server entry is a named, opaque configuration blob. This crate
//! owns the three JSON files such entries are installed into and the
//! read-modify-write protocol over them:
//!
//! - [`Scope`] resolves which file backs a scope (`project`, `local`,
//!   `user`/`global`).
//! - [`ConfigStore`] installs, uninstalls, and lists entries in one scope's
//!   file under the top-level `mcpServers` key.
//! - [`gitignore::ensure_entry`] keeps the project-scope file out of
//!   version control (append-once).
//!
//! Reads are tolerant (a missing or unparseable file is an empty document);
//! writes are strict and surface [`Error::WriteFailure`]. Operations on the
//! same resolved path serialize through an in-process per-path lock.

pub mod entry;
pub mod error;
pub mod gitignore;
mod io;
pub mod logging;
pub mod scope;
pub mod store;

pub use entry::ServerEntry;
pub use error::{Error, Result};
pub use scope::{LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, Scope};
pub use store::{ConfigStore, SERVERS_KEY};
