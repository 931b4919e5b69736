//! Diagnostic catalog: the ordered list of fixes a run applies.
//!
//! A catalog is either TOML with one `[[fix]]` table per entry:
//!
//! ```toml
//! [[fix]]
//! file = "src/app/api/admin/maintenance/route.ts"
//! line = 156
//! category = "unused_param"
//! detail = "request"
//! ```
//!
//! or JSON, as a bare array of the same records or an object with a `fix`
//! array.

use crate::rules::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One diagnostic to silence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    /// File path, relative to the run's root.
    pub file: PathBuf,
    /// 1-based line number of the diagnostic.
    pub line: usize,
    /// Which rule family handles the entry.
    pub category: Category,
    /// Identifier the diagnostic names, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl DiagnosticEntry {
    /// Creates an entry.
    pub fn new(
        file: impl Into<PathBuf>,
        line: usize,
        category: Category,
        detail: Option<&str>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            category,
            detail: detail.map(str::to_owned),
        }
    }

    /// `category: detail`, or just the category when there is no detail.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {detail}", self.category),
            None => self.category.to_string(),
        }
    }
}

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    Read {
        /// Catalog path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The catalog is not valid TOML.
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
    /// The catalog is not valid JSON.
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported catalog format '{}': expected .toml or .json", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    fix: Vec<DiagnosticEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Entries(Vec<DiagnosticEntry>),
    Table(CatalogFile),
}

/// Ordered diagnostic entries. Order is significant: entries are applied
/// one after another against the file as left by the previous entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<DiagnosticEntry>,
}

impl Catalog {
    /// Wraps entries in catalog order.
    #[must_use]
    pub fn new(entries: Vec<DiagnosticEntry>) -> Self {
        Self { entries }
    }

    /// Loads a catalog, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }

    /// Parses a TOML catalog of `[[fix]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.fix))
    }

    /// Parses a JSON catalog, either an array of entries or `{"fix": [...]}`.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let entries = match serde_json::from_str::<JsonCatalog>(content)? {
            JsonCatalog::Entries(entries) => entries,
            JsonCatalog::Table(file) => file.fix,
        };
        Ok(Self::new(entries))
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
