//! End-to-end tests for the install/uninstall/list flow
//!
//! These exercise the full path through the config core: scope resolution,
//! the store's read-modify-write cycle, and the gitignore guard, asserting
//! on the actual bytes that land on disk.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

use mcp_config::{ConfigStore, PROJECT_CONFIG_FILE, Scope, ServerEntry, gitignore};

fn project_store(root: &Path) -> ConfigStore {
    ConfigStore::new(Scope::Project, Some(root)).unwrap()
}

fn fs_entry() -> ServerEntry {
    ServerEntry::new(
        "fs",
        json!({"command": "npx", "args": ["fs-server"], "env": {}}),
    )
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_concrete_install_scenario() {
    // Fresh project, no .mcp.json yet.
    let temp = TempDir::new().unwrap();
    let store = project_store(temp.path());

    store.install(&fs_entry()).unwrap();

    let path = temp.path().join(PROJECT_CONFIG_FILE);
    assert_eq!(
        read_json(&path),
        json!({"mcpServers": {"fs": {"command": "npx", "args": ["fs-server"], "env": {}}}})
    );

    // Written pretty-printed with 2-space indentation.
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("  \"mcpServers\""));
    assert!(content.contains("    \"fs\""));
}

#[test]
fn test_install_idempotence_then_overwrite() {
    let temp = TempDir::new().unwrap();
    let store = project_store(temp.path());

    store.install(&fs_entry()).unwrap();
    store.install(&fs_entry()).unwrap();

    let document = read_json(store.path());
    let servers = document["mcpServers"].as_object().unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(
        servers["fs"],
        json!({"command": "npx", "args": ["fs-server"], "env": {}})
    );

    // A different config under the same id wins, still one entry.
    store
        .install(&ServerEntry::new("fs", json!({"command": "node", "args": []})))
        .unwrap();
    let document = read_json(store.path());
    let servers = document["mcpServers"].as_object().unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers["fs"]["command"], "node");
}

#[test]
fn test_uninstall_absent_id_leaves_bytes_untouched() {
    let temp = TempDir::new().unwrap();
    let store = project_store(temp.path());

    store.install(&fs_entry()).unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    assert!(!store.uninstall("ghost").unwrap());

    let after = fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_install_list_uninstall_roundtrip() {
    let temp = TempDir::new().unwrap();
    let store = project_store(temp.path());

    store.install(&fs_entry()).unwrap();
    assert!(store.list().contains(&"fs".to_string()));

    assert!(store.uninstall("fs").unwrap());
    assert!(!store.list().contains(&"fs".to_string()));
}

#[test]
fn test_malformed_file_is_listed_empty_and_replaced_on_install() {
    let temp = TempDir::new().unwrap();
    let store = project_store(temp.path());
    fs::write(store.path(), "{ this is not json").unwrap();

    assert!(store.list().is_empty());

    store.install(&fs_entry()).unwrap();

    let document = read_json(store.path());
    let servers = document["mcpServers"].as_object().unwrap();
    assert_eq!(servers.len(), 1);
    assert!(servers.contains_key("fs"));
}

#[test]
fn test_scope_isolation_across_roots_and_user() {
    let p1 = TempDir::new().unwrap();
    let p2 = TempDir::new().unwrap();

    project_store(p1.path()).install(&fs_entry()).unwrap();

    // Another project root sees nothing.
    assert!(project_store(p2.path()).list().is_empty());

    // The user scope file (wherever this environment's home is) never picks
    // up a project-scope install. Read-only probe by unique id.
    let user = ConfigStore::new(Scope::User, None).unwrap();
    assert!(!user.list().contains(&"fs".to_string()));
}

#[test]
fn test_local_and_project_files_are_distinct() {
    let temp = TempDir::new().unwrap();
    let project = project_store(temp.path());
    let local = ConfigStore::new(Scope::Local, Some(temp.path())).unwrap();

    project
        .install(&ServerEntry::new("in-project", json!({"command": "a"})))
        .unwrap();
    local
        .install(&ServerEntry::new("in-local", json!({"command": "b"})))
        .unwrap();

    assert_eq!(project.list(), vec!["in-project".to_string()]);
    assert_eq!(local.list(), vec!["in-local".to_string()]);
    assert!(temp.path().join(".mcp.json").exists());
    assert!(temp.path().join(".claude/mcp.json").exists());
}

#[test]
fn test_foreign_top_level_keys_survive_full_cycle() {
    let temp = TempDir::new().unwrap();
    let store = project_store(temp.path());
    fs::write(
        store.path(),
        r#"{"editor": {"fontSize": 12}, "mcpServers": {"old": {"command": "x"}}}"#,
    )
    .unwrap();

    store.install(&fs_entry()).unwrap();
    assert!(store.uninstall("old").unwrap());

    let document = read_json(store.path());
    assert_eq!(document["editor"]["fontSize"], 12);
    let servers = document["mcpServers"].as_object().unwrap();
    assert_eq!(servers.len(), 1);
    assert!(servers.contains_key("fs"));
}

#[test]
fn test_non_object_root_is_replaced() {
    let temp = TempDir::new().unwrap();
    let store = project_store(temp.path());
    fs::write(store.path(), "[\"was\", \"an\", \"array\"]").unwrap();

    store.install(&fs_entry()).unwrap();

    let document = read_json(store.path());
    assert!(document.is_object());
    assert!(document["mcpServers"]["fs"].is_object());
}

// ---------------------------------------------------------------------------
// Gitignore guard, exact-match semantics
// ---------------------------------------------------------------------------

#[test]
fn test_gitignore_literal_line_among_content_means_no_write() {
    let temp = TempDir::new().unwrap();
    let original = "node_modules/\n.mcp.json\n*.log\n";
    fs::write(temp.path().join(".gitignore"), original).unwrap();

    assert!(!gitignore::ensure_entry(temp.path(), PROJECT_CONFIG_FILE).unwrap());
    assert_eq!(
        fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
        original
    );
}

#[test]
fn test_gitignore_glob_still_gets_literal_append() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".gitignore"), "*.json\n").unwrap();

    assert!(gitignore::ensure_entry(temp.path(), PROJECT_CONFIG_FILE).unwrap());

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(content, "*.json\n\n# MCP configuration\n.mcp.json\n");
}

#[test]
fn test_gitignore_created_for_fresh_project() {
    let temp = TempDir::new().unwrap();

    assert!(gitignore::ensure_entry(temp.path(), PROJECT_CONFIG_FILE).unwrap());
    assert!(!gitignore::ensure_entry(temp.path(), PROJECT_CONFIG_FILE).unwrap());

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(content, "\n\n# MCP configuration\n.mcp.json\n");
}

// ---------------------------------------------------------------------------
// Concurrent in-process writers
// ---------------------------------------------------------------------------

#[test]
fn test_parallel_installs_do_not_lose_entries() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let root = root.clone();
            std::thread::spawn(move || {
                let store = ConfigStore::new(Scope::Project, Some(&root)).unwrap();
                store
                    .install(&ServerEntry::new(
                        format!("server-{i}"),
                        json!({"command": "npx", "args": [], "env": {}}),
                    ))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = ConfigStore::new(Scope::Project, Some(&root)).unwrap();
    let mut ids = store.list();
    ids.sort();
    let expected: Vec<String> = (0..8).map(|i| format!("server-{i}")).collect();
    assert_eq!(ids, expected);
}
