//! Core catalog logic for the RICS store browser.
//! This crate owns normalization, search and sort; rendering stays outside.

pub mod config;
pub mod logging;
pub mod markup;
pub mod model;
pub mod normalize;
pub mod search;
pub mod source;
pub mod store;

pub use config::{CatalogConfig, ConfigError, SourceFiles};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingConfig};
pub use markup::{substitute_placeholders, translate, TrustedMarkup};
pub use model::category::Category;
pub use model::field::{CatalogRecord, FieldValue};
pub use model::incident::IncidentRecord;
pub use model::item::{ItemRecord, QuantityLimit};
pub use model::race::{GenderSet, RaceRecord, RaceVariant};
pub use model::record::Record;
pub use model::trait_record::TraitRecord;
pub use normalize::{normalize_category, NormalizeError, NormalizeOutcome};
pub use search::query::{SortDirection, SortState};
pub use source::{CatalogSource, DirectorySource, MemorySource, SourceError};
pub use store::fallback::{FallbackPolicy, FallbackTable};
pub use store::render::RenderSurface;
pub use store::report::{CategoryLoad, LoadError, LoadReport};
pub use store::{CatalogStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
