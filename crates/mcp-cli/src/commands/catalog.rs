//! Catalog browsing commands: search, show, categories

use colored::Colorize;

use mcp_catalog::Catalog;

use crate::error::{CliError, Result};

/// Run the search command
pub fn run_search(catalog: &Catalog, term: Option<&str>, category: Option<&str>) -> Result<()> {
    // An unknown category warns and drops the filter rather than failing.
    let known = catalog.categories();
    let category = match category {
        Some(name) if !known.iter().any(|c| c == name) => {
            eprintln!(
                "{} Unknown category '{}'. Valid: {}",
                "warning:".yellow().bold(),
                name,
                known.join(", ")
            );
            None
        }
        other => other,
    };

    let hits = catalog.filter(term.unwrap_or(""), category);

    println!("{}", "Server Catalog".bold());
    println!();

    if hits.is_empty() {
        println!("  No servers match.");
    } else {
        for entry in &hits {
            let marker = if entry.requires_api { "*" } else { " " };
            println!(
                "  {:<20}{} {} ({})",
                entry.id.green(),
                marker.yellow(),
                entry.description,
                entry.category.dimmed()
            );
        }
        println!();
        println!("  {} requires API credentials", "*".yellow());
    }

    println!();
    println!(
        "{} {} servers. Use {} for details.",
        "Total:".dimmed(),
        hits.len(),
        "mcpman show <id>".cyan()
    );

    Ok(())
}

/// Run the show command
pub fn run_show(catalog: &Catalog, id: &str) -> Result<()> {
    let entry = catalog.get(id).ok_or_else(|| {
        CliError::user(format!(
            "Unknown server '{id}'. Run 'mcpman search' to browse the catalog."
        ))
    })?;

    println!("{}", entry.name.bold());
    println!("  {:<13} {}", "Id:".dimmed(), entry.id);
    println!("  {:<13} {}", "Category:".dimmed(), entry.category);
    println!("  {:<13} {}", "Description:".dimmed(), entry.description);
    if !entry.repository.is_empty() {
        println!("  {:<13} {}", "Repository:".dimmed(), entry.repository.underline());
    }
    println!(
        "  {:<13} {} {}",
        "Command:".dimmed(),
        entry.config.command,
        entry.config.args.join(" ")
    );
    if !entry.config.env.is_empty() {
        let keys: Vec<&str> = entry.config.env.keys().map(String::as_str).collect();
        println!("  {:<13} {}", "Env keys:".dimmed(), keys.join(", "));
    }
    if !entry.tags.is_empty() {
        println!("  {:<13} {}", "Tags:".dimmed(), entry.tags.join(", "));
    }
    println!(
        "  {:<13} ~{} tokens, popularity {}",
        "Cost:".dimmed(),
        entry.estimated_tokens,
        entry.popularity
    );

    if entry.requires_api {
        println!();
        println!("{}", "API fields".bold());
        for field in &entry.api_fields {
            let requirement = if field.required { "required" } else { "optional" };
            println!(
                "  {:<30} {} ({}, {})",
                field.name.yellow(),
                field.label,
                field.field_type,
                requirement
            );
            if let Some(description) = &field.description {
                println!("  {:<30} {}", "", description.dimmed());
            }
        }
    }

    println!();
    println!(
        "Install with {}.",
        format!("mcpman install {}", entry.id).cyan()
    );

    Ok(())
}

/// Run the categories command
pub fn run_categories(catalog: &Catalog) -> Result<()> {
    println!("{}", "Categories".bold());
    println!();

    for category in catalog.categories() {
        let count = catalog.filter("", Some(&category)).len();
        println!("  {:<16} {} servers", category.green(), count);
    }

    println!();
    println!(
        "Use {} to browse one.",
        "mcpman search --category <name>".cyan()
    );

    Ok(())
}
