//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// MCP Manager - Install and manage MCP servers for Claude
#[derive(Parser, Debug)]
#[command(name = "mcpman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra registry document loaded over the built-in catalog
    #[arg(long, global = true, env = "MCPMAN_REGISTRY", value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Install an MCP server into a configuration scope
    ///
    /// Looks the server up in the catalog, merges --env overrides over its
    /// default environment, and writes it into the scope's config file.
    /// A project-scope install also adds .mcp.json to the project's
    /// .gitignore.
    ///
    /// Examples:
    ///   mcpman install filesystem                 # Into ./.mcp.json
    ///   mcpman install github --scope user        # For every project
    ///   mcpman install github --env GITHUB_PERSONAL_ACCESS_TOKEN=ghp_abc
    ///   mcpman install postgres --project ~/work/api --scope local
    Install {
        /// Server id (use 'mcpman search' to find one)
        id: String,

        /// Target scope (project, local, or user/global)
        #[arg(short, long, default_value = "project")]
        scope: String,

        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Environment override as KEY=VALUE (repeatable)
        #[arg(short, long, value_name = "KEY=VALUE")]
        env: Vec<String>,
    },

    /// Uninstall an MCP server from a configuration scope
    Uninstall {
        /// Server id to remove
        id: String,

        /// Target scope (project, local, or user/global)
        #[arg(short, long, default_value = "project")]
        scope: String,

        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,
    },

    /// List installed MCP servers in a scope
    ///
    /// Examples:
    ///   mcpman list                    # Project scope of ./
    ///   mcpman list --scope user
    ///   mcpman list --json             # Ids only, for scripting
    List {
        /// Target scope (project, local, or user/global)
        #[arg(short, long, default_value = "project")]
        scope: String,

        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Search the server catalog
    ///
    /// Matches the term against names, descriptions, and tags,
    /// case-insensitively. Without a term, lists the whole catalog.
    ///
    /// Examples:
    ///   mcpman search
    ///   mcpman search database
    ///   mcpman search --category Search
    Search {
        /// Search term
        term: Option<String>,

        /// Filter by exact category (see 'mcpman categories')
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show detailed information about a catalog server
    ///
    /// Displays the launch command, environment keys, credential fields,
    /// and the repository URL.
    Show {
        /// Server id (e.g. "filesystem", "github")
        id: String,
    },

    /// List catalog categories
    Categories,

    /// Ensure .mcp.json is listed in the project's .gitignore
    Gitignore {
        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   mcpman completions bash > ~/.local/share/bash-completion/completions/mcpman
    ///   mcpman completions zsh > ~/.zfunc/_mcpman
    ///   mcpman completions fish > ~/.config/fish/completions/mcpman.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
