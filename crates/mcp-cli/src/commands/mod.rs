//! Command implementations for mcp-cli

pub mod catalog;
pub mod completions;
pub mod gitignore;
pub mod install;
pub mod list;

pub use catalog::{run_categories, run_search, run_show};
pub use completions::run_completions;
pub use gitignore::run_gitignore;
pub use install::{run_install, run_uninstall};
pub use list::run_list;
