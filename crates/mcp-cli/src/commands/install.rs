//! Install and uninstall command implementations
//!
//! Both commands resolve the target scope, then hand a `ServerEntry` to the
//! config store. Project-scope installs additionally run the gitignore
//! guard, reporting failures as warnings rather than failing the install.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use colored::Colorize;

use mcp_catalog::Catalog;
use mcp_config::{ConfigStore, PROJECT_CONFIG_FILE, Scope, gitignore};

use crate::error::{CliError, Result};

/// Run the install command
pub fn run_install(
    catalog: &Catalog,
    id: &str,
    scope_name: &str,
    project: Option<&Path>,
    env_pairs: &[String],
) -> Result<()> {
    let entry = catalog.get(id).ok_or_else(|| unknown_server(id))?;
    let scope: Scope = scope_name.parse()?;
    let project_root = resolve_project_root(scope, project)?;
    let overrides = parse_env_pairs(env_pairs)?;

    println!(
        "{} Installing {} ({} scope)",
        "=>".blue().bold(),
        id.cyan(),
        scope
    );

    let store = ConfigStore::new(scope, project_root.as_deref())?;
    store.install(&entry.to_server_entry_with_env(&overrides))?;

    println!(
        "{} {} installed to {}.",
        "OK".green().bold(),
        entry.name.cyan(),
        store.path().display()
    );

    report_missing_credentials(entry, &overrides);

    // Project-scope configs should never end up committed.
    if scope == Scope::Project {
        if let Some(root) = &project_root {
            match gitignore::ensure_entry(root, PROJECT_CONFIG_FILE) {
                Ok(true) => println!(
                    "{} Added {} to .gitignore.",
                    "OK".green().bold(),
                    PROJECT_CONFIG_FILE.cyan()
                ),
                Ok(false) => {}
                Err(e) => eprintln!(
                    "{} Could not update .gitignore: {}",
                    "warning:".yellow().bold(),
                    e
                ),
            }
        }
    }

    Ok(())
}

/// Run the uninstall command
pub fn run_uninstall(id: &str, scope_name: &str, project: Option<&Path>) -> Result<()> {
    let scope: Scope = scope_name.parse()?;
    let project_root = resolve_project_root(scope, project)?;

    println!(
        "{} Uninstalling {} ({} scope)",
        "=>".blue().bold(),
        id.cyan(),
        scope
    );

    let store = ConfigStore::new(scope, project_root.as_deref())?;
    if store.uninstall(id)? {
        println!("{} {} removed.", "OK".green().bold(), id.cyan());
    } else {
        println!(
            "{} {} was not installed in this scope.",
            "WARN".yellow().bold(),
            id.cyan()
        );
    }

    Ok(())
}

/// The project root handed to the resolver: the explicit flag when given,
/// else the current directory for scopes that need one.
pub(crate) fn resolve_project_root(
    scope: Scope,
    project: Option<&Path>,
) -> Result<Option<PathBuf>> {
    match project {
        Some(path) => Ok(Some(path.to_path_buf())),
        None if scope.requires_project_root() => Ok(Some(std::env::current_dir()?)),
        None => Ok(None),
    }
}

fn unknown_server(id: &str) -> CliError {
    CliError::user(format!(
        "Unknown server '{id}'. Run 'mcpman search' to browse the catalog."
    ))
}

/// Parse repeated KEY=VALUE arguments into an override map.
fn parse_env_pairs(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut overrides = BTreeMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                overrides.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(CliError::user(format!(
                    "Invalid --env value '{pair}', expected KEY=VALUE"
                )));
            }
        }
    }
    Ok(overrides)
}

/// Point out required credential fields the user has not supplied and that
/// have no default, so a fresh install is not silently non-functional.
fn report_missing_credentials(
    entry: &mcp_catalog::CatalogEntry,
    overrides: &BTreeMap<String, String>,
) {
    if !entry.requires_api {
        return;
    }
    let missing: Vec<&str> = entry
        .api_fields
        .iter()
        .filter(|field| field.required && !overrides.contains_key(&field.name))
        .map(|field| field.name.as_str())
        .collect();
    if !missing.is_empty() {
        println!(
            "{} Required credentials not set: {}",
            "WARN".yellow().bold(),
            missing.join(", ")
        );
    }
}
