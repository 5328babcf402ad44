//! YAML catalogs of category-grouped prompt units.
//!
//! `weft-catalog` loads unit definitions from YAML files and turns them into
//! [`weft::PromptUnit`]s. A catalog file is a mapping of category label to a
//! sequence of unit definitions; `name` is the only required field:
//!
//! ```yaml
//! system_prompts:
//!   - name: role
//!     content: You are a helpful agent.
//!     order: 0
//! context_prompts:
//!   - name: question
//!     content: "What is $topic?"
//!   - name: scratch
//!     content: Think step by step.
//!     enabled: false
//! ```
//!
//! The catalog is a loader and a read view, nothing more: it feeds units into
//! the core's constructors and stays out of the render path. Unknown
//! categories select nothing, mirroring the core's not-found tolerance.
//!
//! # Example
//!
//! ```
//! use weft::Substitutions;
//! use weft_catalog::Catalog;
//!
//! let catalog = Catalog::parse(
//!     "greetings:\n  - name: hello\n    content: Hello $name!\n",
//! )
//! .unwrap();
//!
//! let assembler = catalog.assembler(&["greetings"], "\n\n");
//! let prompt = assembler.render(&Substitutions::new().set("name", "World"));
//! assert_eq!(prompt, "Hello World!");
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;
use weft::{Assembler, PromptUnit};

/// Failure to read or parse a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid catalog mapping.
    #[error("failed to parse catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// An in-memory catalog of prompt units grouped under category labels.
///
/// Categories iterate in sorted label order; units keep their in-file
/// sequence order within a category.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<PromptUnit>>,
}

impl Catalog {
    /// Parse a catalog from YAML text.
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let categories: BTreeMap<String, Vec<PromptUnit>> = serde_yaml::from_str(input)?;
        debug!(categories = categories.len(), "parsed catalog");
        Ok(Self { categories })
    }

    /// Load a catalog from a YAML file.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let catalog = Self::parse(&raw)?;
        debug!(path = %path.display(), units = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Category labels, sorted.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Units of one category, in file order. Empty for an unknown label.
    pub fn category(&self, label: &str) -> &[PromptUnit] {
        self.categories
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First unit with the given name across all categories, scanning
    /// categories in sorted label order.
    pub fn find(&self, name: &str) -> Option<&PromptUnit> {
        self.units().find(|u| u.name == name)
    }

    /// All units, category by category.
    pub fn units(&self) -> impl Iterator<Item = &PromptUnit> {
        self.categories.values().flatten()
    }

    /// Total number of units across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no units.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a fresh [`Assembler`] seeded with every unit of the named
    /// categories, in catalog order. Unknown labels contribute nothing.
    pub fn assembler(&self, labels: &[&str], separator: impl Into<String>) -> Assembler {
        let mut assembler = Assembler::with_separator(separator);
        for label in labels {
            assembler.add_many(self.category(label).iter().cloned());
        }
        assembler
    }
}
