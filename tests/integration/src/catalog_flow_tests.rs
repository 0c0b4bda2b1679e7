//! End-to-end tests for the catalog-to-config flow
//!
//! A catalog entry (built-in or loaded from a registry document) becomes a
//! `ServerEntry` and lands in a scope file; listings join installed ids back
//! to catalog metadata.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

use mcp_catalog::Catalog;
use mcp_config::{ConfigStore, Scope};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/registry/custom-registry.json")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_builtin_entry_installs_with_credentials() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::with_builtins();
    let store = ConfigStore::new(Scope::Project, Some(temp.path())).unwrap();

    let github = catalog.get("github").unwrap();
    let overrides = BTreeMap::from([(
        "GITHUB_PERSONAL_ACCESS_TOKEN".to_string(),
        "ghp_secret".to_string(),
    )]);
    store
        .install(&github.to_server_entry_with_env(&overrides))
        .unwrap();

    let document = read_json(store.path());
    let installed = &document["mcpServers"]["github"];
    assert_eq!(installed["command"], "npx");
    assert_eq!(installed["args"][1], "@modelcontextprotocol/server-github");
    assert_eq!(installed["env"]["GITHUB_PERSONAL_ACCESS_TOKEN"], "ghp_secret");

    // The catalog's own defaults were not mutated by the merge.
    assert_eq!(
        catalog.get("github").unwrap().config.env["GITHUB_PERSONAL_ACCESS_TOKEN"],
        ""
    );
}

#[test]
fn test_listing_joins_ids_with_catalog_names() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::with_builtins();
    let store = ConfigStore::new(Scope::Project, Some(temp.path())).unwrap();

    store
        .install(&catalog.get("memory").unwrap().to_server_entry())
        .unwrap();
    store
        .install(&mcp_config::ServerEntry::new(
            "bespoke_server",
            serde_json::json!({"command": "./run.sh"}),
        ))
        .unwrap();

    let names: Vec<String> = store
        .list()
        .iter()
        .map(|id| match catalog.get(id) {
            Some(entry) => entry.name.clone(),
            None => catalog.placeholder(id).name,
        })
        .collect();

    assert!(names.contains(&"Memory".to_string()));
    // Unknown ids get a synthesized display name.
    assert!(names.contains(&"Bespoke server".to_string()));
}

#[test]
fn test_registry_fixture_loads_and_installs() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::from_json_file(&fixture_path()).unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(catalog.categories().contains(&"Tracking".to_string()));

    let tracker = catalog.get("acme-tracker").unwrap();
    assert!(tracker.requires_api);
    assert_eq!(tracker.api_fields[0].name, "ACME_TOKEN");

    let store = ConfigStore::new(Scope::Project, Some(temp.path())).unwrap();
    store.install(&tracker.to_server_entry()).unwrap();

    let document = read_json(store.path());
    assert_eq!(
        document["mcpServers"]["acme-tracker"]["args"][1],
        "@acme/tracker-mcp"
    );
    // Unfilled credential slots are installed as empty strings.
    assert_eq!(document["mcpServers"]["acme-tracker"]["env"]["ACME_TOKEN"], "");
}

#[test]
fn test_registry_fixture_overrides_builtin_definition() {
    let mut catalog = Catalog::with_builtins();
    let builtin_count = catalog.len();

    catalog.load_file(&fixture_path()).unwrap();

    // filesystem was replaced, the other two are new.
    assert_eq!(catalog.len(), builtin_count + 2);
    let filesystem = catalog.get("filesystem").unwrap();
    assert_eq!(filesystem.name, "Filesystem (pinned)");
    assert_eq!(
        filesystem.config.args[1],
        "@mirror/server-filesystem@1.2.3"
    );
}

#[test]
fn test_minimal_fixture_entry_gets_defaults() {
    let catalog = Catalog::from_json_file(&fixture_path()).unwrap();

    let scratch = catalog.get("scratch").unwrap();
    assert!(!scratch.requires_api);
    assert!(scratch.api_fields.is_empty());
    assert_eq!(scratch.config.command, "");
    assert_eq!(scratch.estimated_tokens, 0);
}

#[test]
fn test_search_spans_builtin_and_loaded_entries() {
    let mut catalog = Catalog::with_builtins();
    catalog.load_file(&fixture_path()).unwrap();

    let hits: Vec<&str> = catalog
        .search("tracker")
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(hits, vec!["acme-tracker"]);

    // Built-ins still searchable after a load.
    assert!(!catalog.search("browser").is_empty());
}
