//! Seam to the external rendering surface.

use crate::model::category::Category;
use crate::model::record::Record;

/// Receives the current view of a category whenever it changes.
///
/// Free-text fields must be escaped by the surface; `TrustedMarkup` values
/// are emitted as-is.
pub trait RenderSurface {
    fn render(&mut self, category: Category, records: &[Record]);
}

impl<F> RenderSurface for F
where
    F: FnMut(Category, &[Record]),
{
    fn render(&mut self, category: Category, records: &[Record]) {
        self(category, records)
    }
}
