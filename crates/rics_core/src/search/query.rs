//! Substring search and stable field sort over catalog records.
//!
//! # Invariants
//! - Search never reorders: hits keep input order.
//! - Sort is stable for equal keys in both directions.
//! - Records lacking the sort field order before records that have it.

use crate::model::field::{CatalogRecord, FieldValue};
use serde::Serialize;
use std::cmp::Ordering;

/// Sort direction for one active field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Active sort field and direction for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Next sort state after a sort request on `field`.
    ///
    /// Re-sorting the active field flips direction; any other field starts
    /// ascending.
    pub fn next(previous: Option<&SortState>, field: &str) -> SortState {
        let direction = match previous {
            Some(state) if state.field == field => state.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        SortState {
            field: field.to_string(),
            direction,
        }
    }
}

/// Trims and lowercases a raw search term.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns whether any field of `record` contains `term`.
///
/// `term` must already be normalized with [`normalize_term`].
pub fn matches_term<T: CatalogRecord + ?Sized>(record: &T, term: &str) -> bool {
    record
        .fields()
        .iter()
        .filter_map(|(_, value)| value.search_text())
        .any(|text| text.contains(term))
}

/// Filters `records` by a raw search term.
///
/// A blank term returns every record in input order.
pub fn filter_records<T: CatalogRecord + Clone>(records: &[T], raw_term: &str) -> Vec<T> {
    let term = normalize_term(raw_term);
    if term.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matches_term(*record, &term))
        .cloned()
        .collect()
}

/// Stable in-place sort of `records` by one field.
pub fn sort_records<T: CatalogRecord>(records: &mut [T], field: &str, direction: SortDirection) {
    records.sort_by(|left, right| {
        direction.apply(compare_optional(
            left.field(field).as_ref(),
            right.field(field).as_ref(),
        ))
    });
}

fn compare_optional(left: Option<&FieldValue<'_>>, right: Option<&FieldValue<'_>>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.compare(right),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}
