//! Gitignore guard command

use std::path::Path;

use colored::Colorize;

use mcp_config::{PROJECT_CONFIG_FILE, gitignore};

use crate::error::Result;

/// Run the gitignore command
pub fn run_gitignore(project: Option<&Path>) -> Result<()> {
    let root = match project {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if gitignore::ensure_entry(&root, PROJECT_CONFIG_FILE)? {
        println!(
            "{} Added {} to {}.",
            "OK".green().bold(),
            PROJECT_CONFIG_FILE.cyan(),
            root.join(gitignore::GITIGNORE_FILE).display()
        );
    } else {
        println!(
            "{} {} already ignored.",
            "OK".green().bold(),
            PROJECT_CONFIG_FILE.cyan()
        );
    }

    Ok(())
}
