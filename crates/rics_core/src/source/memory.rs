//! In-memory source holding raw JSON text per category.

use super::{parse_document, CatalogSource, SourceError, SourceResult};
use crate::model::category::Category;
use serde_json::Value;
use std::collections::BTreeMap;

/// Source backed by raw JSON strings, keyed by category.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: BTreeMap<Category, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw document text for `category`.
    pub fn with_document(mut self, category: Category, text: impl Into<String>) -> Self {
        self.documents.insert(category, text.into());
        self
    }

    /// Sets the document for `category` from an already-built JSON value.
    pub fn with_value(self, category: Category, value: &Value) -> Self {
        self.with_document(category, value.to_string())
    }
}

impl CatalogSource for MemorySource {
    fn fetch(&self, category: Category) -> SourceResult<Value> {
        let text = self
            .documents
            .get(&category)
            .ok_or(SourceError::Missing(category))?;
        parse_document(category, text)
    }
}
