//! Server catalog for the MCP manager.
//!
//! This crate knows *which* MCP servers exist and how they are launched;
//! installing them into a configuration scope is `mcp-config`'s job.
//!
//! # Architecture
//!
//! The catalog has two sources:
//!
//! 1. **Built-in definitions** - a curated set of npx-launched servers
//!    compiled into the binary (see [`builtins`]).
//!
//! 2. **Registry documents** - JSON files (`{"mcps": [...], "categories":
//!    [...]}`) loaded at runtime, which can add new servers or override
//!    built-in definitions by id.
//!
//! [`Catalog`] merges both and answers lookup, search, and category
//! queries. For installed ids the catalog has never heard of,
//! [`Catalog::placeholder`] synthesizes a display entry so listings stay
//! uniform.

pub mod builtins;
pub mod catalog;
pub mod entry;
pub mod error;

pub use builtins::{BUILTIN_COUNT, builtin_entries};
pub use catalog::Catalog;
pub use entry::{ApiField, CatalogEntry, Installation, LaunchConfig};
pub use error::{Error, Result};
