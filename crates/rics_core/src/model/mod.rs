//! Normalized, display-ready catalog records.
//!
//! # Responsibility
//! - Define one explicit record type per catalog category.
//! - Expose every record through the uniform [`CatalogRecord`] field view.
//!
//! # Invariants
//! - Record fields are never null; absent source values resolve to defaults
//!   during normalization.
//! - Each category declares its field names up front (no open schema).

pub mod category;
pub mod field;
pub mod incident;
pub mod item;
pub mod race;
pub mod record;
pub mod trait_record;
