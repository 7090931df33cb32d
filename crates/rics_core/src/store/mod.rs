//! Catalog store: load orchestration and per-category query state.
//!
//! # Responsibility
//! - Load all five categories concurrently and normalize each.
//! - Apply per-category fallback policy when a load fails.
//! - Own full and filtered record sets; answer search and sort requests.
//!
//! # Invariants
//! - Full sets are immutable after load.
//! - A filtered view is always a subset or reordering of its full set.
//! - Every view change is pushed to the rendering surface before returning.

mod catalog_store;
pub mod fallback;
pub mod render;
pub mod report;

pub use catalog_store::{CatalogStore, StoreError};
