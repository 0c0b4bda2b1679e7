//! Catalog entry types.
//!
//! A [`CatalogEntry`] is the descriptive record for one known MCP server:
//! identity, category, launch configuration, and the credential fields a
//! frontend asks for before installing. Field names serialize in camelCase
//! to match the registry document format.

use std::collections::BTreeMap;

use mcp_config::ServerEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One known MCP server as described by a registry document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique identifier. Also the key the server is installed under.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short human-readable description.
    pub description: String,
    /// Category label used for filtering (e.g. `"Development"`).
    pub category: String,
    /// Homepage or repository URL.
    #[serde(default)]
    pub repository: String,
    /// Whether the server needs credentials before it is useful.
    #[serde(default)]
    pub requires_api: bool,
    /// Command line written into a scope file on install.
    #[serde(default)]
    pub config: LaunchConfig,
    /// Credential fields to collect when `requires_api` is set.
    #[serde(default)]
    pub api_fields: Vec<ApiField>,
    /// Rough context-token cost of keeping the server connected.
    #[serde(default)]
    pub estimated_tokens: u64,
    /// How the server package is obtained.
    #[serde(default)]
    pub installation: Installation,
    /// Free-form search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Popularity score in 0..=100, display-only.
    #[serde(default)]
    pub popularity: u64,
}

impl CatalogEntry {
    /// Builds the entry handed to a config store on install.
    pub fn to_server_entry(&self) -> ServerEntry {
        ServerEntry::new(&self.id, self.config.to_value())
    }

    /// Like [`CatalogEntry::to_server_entry`], with `overrides` merged over
    /// the catalog's default environment. An override wins on key collision.
    pub fn to_server_entry_with_env(&self, overrides: &BTreeMap<String, String>) -> ServerEntry {
        ServerEntry::new(&self.id, self.config.with_env(overrides).to_value())
    }
}

/// Command, arguments, and environment an installed server is launched with.
///
/// All three fields serialize unconditionally: an installed entry always has
/// the `{"command", "args", "env"}` shape, even when args or env are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub command: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
}

impl LaunchConfig {
    /// Returns a copy with `overrides` merged over the default environment.
    pub fn with_env(&self, overrides: &BTreeMap<String, String>) -> Self {
        let mut merged = self.clone();
        for (key, value) in overrides {
            merged.env.insert(key.clone(), value.clone());
        }
        merged
    }

    /// The JSON value stored under `mcpServers.<id>` in a scope file.
    pub fn to_value(&self) -> Value {
        json!({
            "command": self.command,
            "args": self.args,
            "env": self.env,
        })
    }
}

/// How a server package is obtained and launched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Installation {
    /// Package manager kind (`"npm"`, `"pip"`, `"external"`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Package identifier within that manager.
    pub package: String,
}

/// One credential or setting collected from the user before install.
///
/// The value ends up as an environment variable named `name` in the
/// installed launch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiField {
    /// Environment variable the value is written to.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Input kind: `"text"`, `"password"`, or `"select"`.
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Choices for `"select"` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

fn default_field_type() -> String {
    "text".to_string()
}
