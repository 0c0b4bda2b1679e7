//! List command for installed servers

use std::path::Path;

use colored::Colorize;

use mcp_catalog::Catalog;
use mcp_config::{ConfigStore, Scope};

use crate::commands::install::resolve_project_root;
use crate::error::Result;

/// Run the list command
///
/// Joins installed ids with catalog metadata; ids the catalog does not know
/// get a synthesized placeholder entry so the listing stays uniform.
pub fn run_list(
    catalog: &Catalog,
    scope_name: &str,
    project: Option<&Path>,
    json: bool,
) -> Result<()> {
    let scope: Scope = scope_name.parse()?;
    let project_root = resolve_project_root(scope, project)?;

    let store = ConfigStore::new(scope, project_root.as_deref())?;
    let ids = store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    println!("{} ({} scope)", "Installed servers".bold(), scope);
    println!();

    if ids.is_empty() {
        println!("  (none)");
    } else {
        for id in &ids {
            let entry = catalog
                .get(id)
                .cloned()
                .unwrap_or_else(|| catalog.placeholder(id));
            println!(
                "  {:<22} {} ({})",
                id.green(),
                entry.name,
                entry.category.dimmed()
            );
        }
    }

    println!();
    println!(
        "{} {} installed in {}.",
        "Total:".dimmed(),
        ids.len(),
        store.path().display()
    );

    Ok(())
}
