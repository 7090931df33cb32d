//! Per-category load outcomes.

use super::fallback::FallbackPolicy;
use crate::model::category::Category;
use crate::normalize::NormalizeError;
use crate::source::SourceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Typed reason a category failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Source(SourceError),
    Normalize(NormalizeError),
    /// The load worker for the category panicked.
    WorkerPanicked(Category),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::Normalize(err) => write!(f, "{err}"),
            Self::WorkerPanicked(category) => write!(f, "{category} load worker panicked"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Normalize(err) => Some(err),
            Self::WorkerPanicked(_) => None,
        }
    }
}

impl From<SourceError> for LoadError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<NormalizeError> for LoadError {
    fn from(value: NormalizeError) -> Self {
        Self::Normalize(value)
    }
}

/// Outcome of loading one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLoad {
    Loaded {
        records: usize,
        skipped: usize,
        excluded: usize,
    },
    FallbackApplied {
        policy: FallbackPolicy,
        records: usize,
        reason: LoadError,
    },
}

/// Load outcomes for all categories, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    entries: Vec<(Category, CategoryLoad)>,
}

impl LoadReport {
    pub(crate) fn new(entries: Vec<(Category, CategoryLoad)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, category: Category) -> Option<&CategoryLoad> {
        self.entries
            .iter()
            .find(|(entry_category, _)| *entry_category == category)
            .map(|(_, load)| load)
    }

    pub fn entries(&self) -> &[(Category, CategoryLoad)] {
        &self.entries
    }

    /// Returns whether any category fell back.
    pub fn is_degraded(&self) -> bool {
        self.failed_categories().next().is_some()
    }

    /// Categories that fell back, in report order.
    pub fn failed_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries
            .iter()
            .filter(|(_, load)| matches!(load, CategoryLoad::FallbackApplied { .. }))
            .map(|(category, _)| *category)
    }
}
