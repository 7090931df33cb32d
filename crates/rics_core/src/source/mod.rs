//! Raw catalog data sources.
//!
//! # Responsibility
//! - Define the fetch contract the catalog store loads through.
//! - Keep file and in-memory access details out of the store.
//!
//! # Invariants
//! - A fetch returns one parsed JSON document per category.
//! - Fetch failures are typed; sources never panic on bad input.

mod directory;
mod memory;

pub use directory::DirectorySource;
pub use memory::MemorySource;

use crate::model::category::Category;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure to obtain or parse one category document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Backing file is missing or unreadable.
    Io {
        category: Category,
        path: PathBuf,
        message: String,
    },
    /// Source has no document for the category.
    Missing(Category),
    /// Document text is not valid JSON.
    InvalidJson { category: Category, message: String },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io {
                category,
                path,
                message,
            } => write!(
                f,
                "failed to read {category} source `{}`: {message}",
                path.display()
            ),
            Self::Missing(category) => write!(f, "no {category} source available"),
            Self::InvalidJson { category, message } => {
                write!(f, "{category} source is not valid JSON: {message}")
            }
        }
    }
}

impl Error for SourceError {}

/// Read-only access to raw category documents.
///
/// Implementations must be shareable across the concurrent load workers.
pub trait CatalogSource: Sync {
    fn fetch(&self, category: Category) -> SourceResult<Value>;
}

pub(crate) fn parse_document(category: Category, text: &str) -> SourceResult<Value> {
    serde_json::from_str(text).map_err(|err| SourceError::InvalidJson {
        category,
        message: err.to_string(),
    })
}
