//! Catalog store implementation.

use super::fallback::FallbackTable;
use super::render::RenderSurface;
use super::report::{CategoryLoad, LoadError, LoadReport};
use crate::model::category::Category;
use crate::model::record::Record;
use crate::normalize::{normalize_category, NormalizeOutcome};
use crate::search::query::{filter_records, normalize_term, sort_records, SortState};
use crate::source::CatalogSource;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Query-time store errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Sort requested on a field the category does not declare.
    UnknownField { category: Category, field: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField { category, field } => {
                write!(f, "{category} records have no field `{field}`")
            }
        }
    }
}

impl Error for StoreError {}

#[derive(Debug, Clone, Default)]
struct CategoryState {
    full: Vec<Record>,
    view: Vec<Record>,
    sort: Option<SortState>,
}

impl CategoryState {
    fn new(records: Vec<Record>) -> Self {
        Self {
            view: records.clone(),
            full: records,
            sort: None,
        }
    }
}

/// Owner of every category's records and current view.
pub struct CatalogStore<V: RenderSurface> {
    states: [CategoryState; 5],
    report: LoadReport,
    surface: V,
}

impl<V: RenderSurface> CatalogStore<V> {
    /// Loads every category with the default fallback table.
    pub fn load<S: CatalogSource>(source: &S, surface: V) -> Self {
        Self::load_with_fallbacks(source, surface, &FallbackTable::default())
    }

    /// Loads every category, applying `fallbacks` to failed ones.
    ///
    /// The five fetches run concurrently; the first render happens only
    /// after all of them have settled.
    pub fn load_with_fallbacks<S: CatalogSource>(
        source: &S,
        surface: V,
        fallbacks: &FallbackTable,
    ) -> Self {
        let started_at = Instant::now();
        info!("event=catalog_load module=store status=start categories={}", Category::ALL.len());

        let results = load_all(source);
        let mut states: [CategoryState; 5] = Default::default();
        let mut entries = Vec::with_capacity(Category::ALL.len());

        for (category, result) in results {
            let (records, load) = match result {
                Ok(outcome) => {
                    info!(
                        "event=catalog_load module=store status=ok category={} records={} skipped={} excluded={}",
                        category,
                        outcome.records.len(),
                        outcome.skipped,
                        outcome.excluded
                    );
                    let load = CategoryLoad::Loaded {
                        records: outcome.records.len(),
                        skipped: outcome.skipped,
                        excluded: outcome.excluded,
                    };
                    (outcome.records, load)
                }
                Err(reason) => {
                    let policy = fallbacks.policy(category);
                    let records = policy.records(category);
                    error!(
                        "event=catalog_load module=store status=fallback category={} policy={:?} records={} error={}",
                        category,
                        policy,
                        records.len(),
                        reason
                    );
                    let load = CategoryLoad::FallbackApplied {
                        policy,
                        records: records.len(),
                        reason,
                    };
                    (records, load)
                }
            };
            states[category.index()] = CategoryState::new(records);
            entries.push((category, load));
        }

        let report = LoadReport::new(entries);
        let failed = report.failed_categories().count();
        if failed > 0 {
            warn!(
                "event=catalog_ready module=store status=degraded failed_categories={} duration_ms={}",
                failed,
                started_at.elapsed().as_millis()
            );
        } else {
            info!(
                "event=catalog_ready module=store status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
        }

        let mut store = Self {
            states,
            report,
            surface,
        };
        for category in Category::ALL {
            store.render(category);
        }
        store
    }

    /// Recomputes the view of `category` from its full set.
    ///
    /// A blank term restores the full set in load order. Searches are not
    /// cumulative.
    pub fn search(&mut self, category: Category, term: &str) -> &[Record] {
        let state = &mut self.states[category.index()];
        state.view = filter_records(&state.full, term);
        debug!(
            "event=catalog_search module=store status=ok category={} term_len={} hits={}",
            category,
            normalize_term(term).chars().count(),
            state.view.len()
        );
        self.render(category);
        self.view(category)
    }

    /// Sorts the current view of `category` in place by `field`.
    ///
    /// Sorting the same field again flips direction.
    pub fn sort(&mut self, category: Category, field: &str) -> Result<&[Record], StoreError> {
        if !category.declares_field(field) {
            return Err(StoreError::UnknownField {
                category,
                field: field.to_string(),
            });
        }

        let state = &mut self.states[category.index()];
        let next = SortState::next(state.sort.as_ref(), field);
        sort_records(&mut state.view, &next.field, next.direction);
        debug!(
            "event=catalog_sort module=store status=ok category={} field={} direction={:?}",
            category, next.field, next.direction
        );
        state.sort = Some(next);
        self.render(category);
        Ok(self.view(category))
    }

    /// Every loaded record of `category`, in load order.
    pub fn full(&self, category: Category) -> &[Record] {
        &self.states[category.index()].full
    }

    /// Current filtered/sorted view of `category`.
    pub fn view(&self, category: Category) -> &[Record] {
        &self.states[category.index()].view
    }

    /// Active sort of `category`, if any.
    pub fn sort_state(&self, category: Category) -> Option<&SortState> {
        self.states[category.index()].sort.as_ref()
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn into_surface(self) -> V {
        self.surface
    }

    fn render(&mut self, category: Category) {
        let state = &self.states[category.index()];
        self.surface.render(category, &state.view);
    }
}

fn load_all<S: CatalogSource>(
    source: &S,
) -> Vec<(Category, Result<NormalizeOutcome<Record>, LoadError>)> {
    std::thread::scope(|scope| {
        let workers = Category::ALL
            .into_iter()
            .map(|category| (category, scope.spawn(move || load_category(source, category))))
            .collect::<Vec<_>>();

        workers
            .into_iter()
            .map(|(category, worker)| {
                let result = worker
                    .join()
                    .unwrap_or(Err(LoadError::WorkerPanicked(category)));
                (category, result)
            })
            .collect()
    })
}

fn load_category<S: CatalogSource>(
    source: &S,
    category: Category,
) -> Result<NormalizeOutcome<Record>, LoadError> {
    let document = source.fetch(category)?;
    Ok(normalize_category(category, &document)?)
}
