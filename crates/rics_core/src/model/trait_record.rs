//! Character trait record.
//!
//! # Invariants
//! - A listed trait can be added or removed.
//! - A listed trait has a positive add or remove price.
//! - `description` has pawn placeholders already resolved.
//! - Every `*_markup` field is the translation of its raw counterpart.

use super::field::{CatalogRecord, FieldValue};
use crate::markup::TrustedMarkup;
use serde::Serialize;

/// Declared trait field names.
pub const TRAIT_FIELDS: &[&str] = &[
    "defName",
    "name",
    "description",
    "stats",
    "conflicts",
    "canAdd",
    "canRemove",
    "addPrice",
    "removePrice",
    "bypassLimit",
    "modSource",
];

/// Normalized character trait.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitRecord {
    pub def_name: String,
    pub name: String,
    pub name_markup: TrustedMarkup,
    pub description: String,
    pub description_markup: TrustedMarkup,
    pub stats: Vec<String>,
    pub stats_markup: Vec<TrustedMarkup>,
    pub conflicts: Vec<String>,
    pub conflicts_markup: Vec<TrustedMarkup>,
    pub can_add: bool,
    pub can_remove: bool,
    pub add_price: f64,
    pub remove_price: f64,
    pub bypass_limit: bool,
    pub mod_source: String,
}

impl TraitRecord {
    /// Inclusion rule for the trait catalog.
    pub fn is_listed(&self) -> bool {
        (self.can_add || self.can_remove) && (self.add_price > 0.0 || self.remove_price > 0.0)
    }
}

impl CatalogRecord for TraitRecord {
    fn field_names(&self) -> &'static [&'static str] {
        TRAIT_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "defName" => FieldValue::Text(&self.def_name),
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            "stats" => FieldValue::List(self.stats.iter().map(String::as_str).collect()),
            "conflicts" => FieldValue::List(self.conflicts.iter().map(String::as_str).collect()),
            "canAdd" => FieldValue::Flag(self.can_add),
            "canRemove" => FieldValue::Flag(self.can_remove),
            "addPrice" => FieldValue::Number(self.add_price),
            "removePrice" => FieldValue::Number(self.remove_price),
            "bypassLimit" => FieldValue::Flag(self.bypass_limit),
            "modSource" => FieldValue::Text(&self.mod_source),
            _ => return None,
        };
        Some(value)
    }
}
