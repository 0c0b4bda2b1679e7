//! Scope resolution for MCP configuration files.
//!
//! Every server entry lands in exactly one JSON file, identified by scope:
//!
//! | scope | file |
//! |---|---|
//! | `project` | `<root>/.mcp.json` |
//! | `local` | `<root>/.claude/mcp.json` |
//! | `user` / `global` | Claude Desktop's config under the home directory |
//!
//! Resolution is a pure path computation: nothing is read or created here.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project-scope config file, relative to the project root.
pub const PROJECT_CONFIG_FILE: &str = ".mcp.json";

/// Local-scope config file, relative to the project root.
pub const LOCAL_CONFIG_FILE: &str = ".claude/mcp.json";

/// User-scope config file relative to the home directory, per platform.
const USER_CONFIG_FILE_UNIX: &str = ".config/claude/claude_desktop_config.json";
const USER_CONFIG_FILE_WINDOWS: &str = "AppData/Roaming/Claude/claude_desktop_config.json";

/// Where an MCP server entry is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Project-level: lives in the repository, conventionally gitignored.
    Project,
    /// Project-local: under the project's `.claude/` directory, never
    /// version controlled.
    Local,
    /// User-level: shared across projects via Claude Desktop's config file.
    User,
}

impl Scope {
    /// Whether resolving this scope requires a project root.
    pub fn requires_project_root(&self) -> bool {
        matches!(self, Scope::Project | Scope::Local)
    }

    /// Resolve the absolute path of the config file backing this scope.
    ///
    /// `project_root` is required (non-empty) for [`Scope::Project`] and
    /// [`Scope::Local`], and ignored for [`Scope::User`]. Callers are
    /// expected to have validated the root already; this defends
    /// independently so the rule is testable on its own.
    pub fn resolve(&self, project_root: Option<&Path>) -> Result<PathBuf> {
        match self {
            Scope::Project => Ok(self.require_root(project_root)?.join(PROJECT_CONFIG_FILE)),
            Scope::Local => Ok(self.require_root(project_root)?.join(LOCAL_CONFIG_FILE)),
            Scope::User => {
                let rel = if cfg!(target_os = "windows") {
                    USER_CONFIG_FILE_WINDOWS
                } else {
                    USER_CONFIG_FILE_UNIX
                };
                Ok(home_dir()?.join(rel))
            }
        }
    }

    fn require_root<'a>(&self, project_root: Option<&'a Path>) -> Result<&'a Path> {
        match project_root {
            Some(root) if !root.as_os_str().is_empty() => Ok(root),
            _ => Err(Error::MissingProjectRoot { scope: *self }),
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    /// Parse a scope tag. `global` is accepted as an alias of `user`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "project" => Ok(Scope::Project),
            "local" => Ok(Scope::Local),
            "user" | "global" => Ok(Scope::User),
            other => Err(Error::InvalidScope {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Scope::Project => "project",
            Scope::Local => "local",
            Scope::User => "user",
        };
        write!(f, "{s}")
    }
}

/// Get the user's home directory.
///
/// `$HOME` and `%USERPROFILE%` take precedence over the platform lookup so
/// tests (and callers) can redirect user-scope files.
fn home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .ok_or(Error::HomeDirNotFound)
}

// ===========================================================================
// Tests
// ===========================================================================
