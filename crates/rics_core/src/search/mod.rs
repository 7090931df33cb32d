//! Category-agnostic query engine.
//!
//! # Responsibility
//! - Substring search over every declared record field.
//! - Stable single-field sort with direction toggling.
//!
//! # Invariants
//! - Works only through [`crate::model::field::CatalogRecord`]; no category
//!   knowledge lives here.

pub mod query;
