//! Category normalizers: raw JSON documents to display-ready records.
//!
//! # Responsibility
//! - Resolve every raw attribute with its documented default.
//! - Apply each category's inclusion rule.
//! - Count entries that could not be read instead of aborting the load.
//!
//! # Invariants
//! - Output order follows source key order; derived xenotypes follow their
//!   parent race directly.
//! - Only a document that is not a mapping fails normalization.

pub mod incidents;
pub mod items;
pub mod races;
pub mod raw;
pub mod traits;

use crate::model::category::Category;
use crate::model::record::Record;
use log::warn;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

use raw::RawEntry;

/// Normalization failure for a whole source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The document is not a mapping of source keys to attribute mappings.
    NotAMapping { category: Category },
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAMapping { category } => {
                write!(f, "{category} source is not a mapping of records")
            }
        }
    }
}

impl Error for NormalizeError {}

/// Normalized records plus bookkeeping about dropped source entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOutcome<T> {
    /// Included records in output order.
    pub records: Vec<T>,
    /// Source entries that were not attribute mappings.
    pub skipped: usize,
    /// Well-formed entries rejected by the inclusion rule.
    pub excluded: usize,
}

impl<T> NormalizeOutcome<T> {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
            excluded: 0,
        }
    }

    /// Wraps records into another representation, keeping the counters.
    pub fn map<U>(self, wrap: impl FnMut(T) -> U) -> NormalizeOutcome<U> {
        NormalizeOutcome {
            records: self.records.into_iter().map(wrap).collect(),
            skipped: self.skipped,
            excluded: self.excluded,
        }
    }
}

/// Normalizes one category's raw document into tagged records.
pub fn normalize_category(
    category: Category,
    document: &Value,
) -> Result<NormalizeOutcome<Record>, NormalizeError> {
    match category {
        Category::Items => items::normalize(document).map(|outcome| outcome.map(Record::Item)),
        Category::Events => {
            incidents::normalize_events(document).map(|outcome| outcome.map(Record::Event))
        }
        Category::Weather => {
            incidents::normalize_weather(document).map(|outcome| outcome.map(Record::Weather))
        }
        Category::Traits => traits::normalize(document).map(|outcome| outcome.map(Record::Trait)),
        Category::Races => races::normalize(document).map(|outcome| outcome.map(Record::Race)),
    }
}

fn expect_mapping(
    category: Category,
    document: &Value,
) -> Result<&Map<String, Value>, NormalizeError> {
    document
        .as_object()
        .ok_or(NormalizeError::NotAMapping { category })
}

/// Runs `build` over every well-formed entry and keeps the listed results.
///
/// `build` returns all records derived from one entry, so one-to-many
/// categories flatten in place.
fn collect_entries<T>(
    category: Category,
    entries: &Map<String, Value>,
    mut build: impl FnMut(&RawEntry<'_>) -> Vec<T>,
    is_listed: impl Fn(&T) -> bool,
) -> NormalizeOutcome<T> {
    let mut outcome = NormalizeOutcome::empty();
    for (key, value) in entries {
        let Some(entry) = RawEntry::new(key, value) else {
            outcome.skipped += 1;
            warn!(
                "event=normalize_entry module=normalize status=skipped category={} reason=not_a_mapping",
                category
            );
            continue;
        };

        for record in build(&entry) {
            if is_listed(&record) {
                outcome.records.push(record);
            } else {
                outcome.excluded += 1;
            }
        }
    }
    outcome
}
