//! MCP Manager CLI
//!
//! The command-line interface for installing and managing MCP server
//! configurations across project, local, and user scopes.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;
use mcp_catalog::Catalog;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for command output.
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    } else {
        // Best effort; RUST_LOG-driven with an info default.
        let _ = mcp_config::logging::init();
    }

    let catalog = load_catalog(&cli)?;

    match cli.command {
        Some(cmd) => execute_command(cmd, &catalog),
        None => {
            // Bare invocation: greet and point at --help.
            println!("{} MCP Manager CLI", "mcpman".green().bold());
            println!();
            println!("Run {} for available commands.", "mcpman --help".cyan());
            Ok(())
        }
    }
}

/// The built-in catalog, extended by the `--registry` document if one
/// was given.
fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let mut catalog = Catalog::with_builtins();
    if let Some(path) = &cli.registry {
        let count = catalog.load_file(path)?;
        tracing::debug!(count, "extra registry entries loaded");
    }
    Ok(catalog)
}

fn execute_command(cmd: Commands, catalog: &Catalog) -> Result<()> {
    match cmd {
        Commands::Install {
            id,
            scope,
            project,
            env,
        } => commands::run_install(catalog, &id, &scope, project.as_deref(), &env),
        Commands::Uninstall { id, scope, project } => {
            commands::run_uninstall(&id, &scope, project.as_deref())
        }
        Commands::List {
            scope,
            project,
            json,
        } => commands::run_list(catalog, &scope, project.as_deref(), json),
        Commands::Search { term, category } => {
            commands::run_search(catalog, term.as_deref(), category.as_deref())
        }
        Commands::Show { id } => commands::run_show(catalog, &id),
        Commands::Categories => commands::run_categories(catalog),
        Commands::Gitignore { project } => commands::run_gitignore(project.as_deref()),
        Commands::Completions { shell } => commands::run_completions(shell),
    }
}
