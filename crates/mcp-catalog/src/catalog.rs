//! In-memory catalog of known MCP server definitions.
//!
//! The catalog is seeded from the built-in registry, optionally extended from
//! a registry document on disk, and queried by id, search term, or category.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::builtins;
use crate::entry::{CatalogEntry, Installation, LaunchConfig};
use crate::error::{Error, Result};

/// Registry document shape: `{"mcps": [...], "categories": [...]}`.
#[derive(Debug, Deserialize)]
struct RegistryDocument {
    mcps: Vec<CatalogEntry>,
    #[serde(default)]
    categories: Vec<String>,
}

/// Lookup, search, and category listing over a set of [`CatalogEntry`] values.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
    /// Categories declared by a loaded registry document. May include
    /// categories no current entry uses.
    declared_categories: Vec<String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            declared_categories: Vec::new(),
        }
    }

    /// Creates a catalog seeded with the built-in server definitions.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for entry in builtins::builtin_entries() {
            catalog.register(entry);
        }
        catalog
    }

    /// Registers an entry. An existing entry with the same id is replaced.
    pub fn register(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.id.clone(), entry);
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entry ids, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// All known categories, sorted and deduplicated. Includes categories a
    /// loaded document declared even when no entry uses them.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .entries
            .values()
            .map(|entry| entry.category.clone())
            .chain(self.declared_categories.iter().cloned())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Case-insensitive containment search over name, description, and tags.
    ///
    /// An empty term matches every entry. Results are sorted by id.
    pub fn search(&self, term: &str) -> Vec<&CatalogEntry> {
        let needle = term.to_lowercase();
        let mut hits: Vec<&CatalogEntry> = self
            .entries
            .values()
            .filter(|entry| matches_term(entry, &needle))
            .collect();
        hits.sort_by(|a, b| a.id.cmp(&b.id));
        hits
    }

    /// [`Catalog::search`] restricted to an exact category when one is given.
    pub fn filter(&self, term: &str, category: Option<&str>) -> Vec<&CatalogEntry> {
        self.search(term)
            .into_iter()
            .filter(|entry| category.map_or(true, |wanted| entry.category == wanted))
            .collect()
    }

    /// Synthesizes a display entry for an installed id the catalog does not
    /// know, so listings can show every installed server uniformly.
    pub fn placeholder(&self, id: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: placeholder_name(id),
            description: format!("Installed MCP server: {id}. Not present in the catalog."),
            category: "Installed".to_string(),
            repository: String::new(),
            requires_api: false,
            config: LaunchConfig::default(),
            api_fields: Vec::new(),
            estimated_tokens: 0,
            installation: Installation {
                kind: "external".to_string(),
                package: id.to_string(),
            },
            tags: vec!["installed".to_string(), "external".to_string()],
            popularity: 0,
        }
    }

    /// Parses a registry document and registers its entries over `self`.
    ///
    /// Unlike scope-file reads, loading is strict: a malformed document is an
    /// error, never silently treated as empty.
    pub fn load_str(&mut self, content: &str) -> Result<usize> {
        let document: RegistryDocument = serde_json::from_str(content)?;
        let count = document.mcps.len();
        for entry in document.mcps {
            self.register(entry);
        }
        for category in document.categories {
            if !self.declared_categories.contains(&category) {
                self.declared_categories.push(category);
            }
        }
        Ok(count)
    }

    /// Reads and parses a registry document from `path`.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let count = self.load_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            entries = count,
            "loaded registry document"
        );
        Ok(count)
    }

    /// Builds a catalog containing only the entries of one document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.load_str(content)?;
        Ok(catalog)
    }

    /// Builds a catalog from a registry document file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.load_file(path)?;
        Ok(catalog)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_term(entry: &CatalogEntry, needle: &str) -> bool {
    entry.name.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Derives a display name from an id: first character uppercased, separator
/// characters in the remainder turned into spaces.
fn placeholder_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().replace(['-', '_'], " ")
        }
        None => String::new(),
    }
}
