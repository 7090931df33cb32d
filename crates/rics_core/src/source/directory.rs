//! File-backed source reading one JSON document per category.

use super::{parse_document, CatalogSource, SourceError, SourceResult};
use crate::config::CatalogConfig;
use crate::model::category::Category;
use log::debug;
use serde_json::Value;
use std::path::PathBuf;

/// Source resolving each category to a file inside the data directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    paths: [PathBuf; 5],
}

impl DirectorySource {
    /// Builds a source from configured data directory and file names.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            paths: Category::ALL.map(|category| config.source_path(category)),
        }
    }

    /// Path read for `category`.
    pub fn path(&self, category: Category) -> &PathBuf {
        &self.paths[category.index()]
    }
}

impl CatalogSource for DirectorySource {
    fn fetch(&self, category: Category) -> SourceResult<Value> {
        let path = self.path(category);
        let text = std::fs::read_to_string(path).map_err(|err| SourceError::Io {
            category,
            path: path.clone(),
            message: err.to_string(),
        })?;
        debug!(
            "event=source_read module=source status=ok category={} bytes={}",
            category,
            text.len()
        );
        parse_document(category, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::DirectorySource;
    use crate::config::CatalogConfig;
    use crate::model::category::Category;
    use crate::source::{CatalogSource, SourceError};

    #[test]
    fn paths_follow_configured_file_names() {
        let mut config = CatalogConfig::with_data_dir("/srv/rics");
        config.sources.traits = "CustomTraits.json".to_string();
        let source = DirectorySource::new(&config);
        assert!(source.path(Category::Items).ends_with("StoreItems.json"));
        assert!(source.path(Category::Traits).ends_with("CustomTraits.json"));
        assert!(source.path(Category::Races).starts_with("/srv/rics"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(&CatalogConfig::with_data_dir(dir.path()));
        let err = source.fetch(Category::Weather).unwrap_err();
        assert!(matches!(
            err,
            SourceError::Io {
                category: Category::Weather,
                ..
            }
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Incidents.json"), "{ not json").unwrap();
        let source = DirectorySource::new(&CatalogConfig::with_data_dir(dir.path()));
        let err = source.fetch(Category::Events).unwrap_err();
        assert!(matches!(err, SourceError::InvalidJson { .. }));
    }
}
