//! Event and weather records.
//!
//! Events and weather share one shape; weather additionally carries a
//! description.
//!
//! # Invariants
//! - A listed incident is enabled, has `base_cost > 0` and an active mod.

use super::field::{CatalogRecord, FieldValue};
use crate::markup::TrustedMarkup;
use serde::Serialize;

/// Declared event field names.
pub const EVENT_FIELDS: &[&str] = &[
    "defName",
    "label",
    "baseCost",
    "karmaType",
    "modSource",
    "modActive",
    "enabled",
];

/// Declared weather field names.
pub const WEATHER_FIELDS: &[&str] = &[
    "defName",
    "label",
    "description",
    "baseCost",
    "karmaType",
    "modSource",
    "modActive",
    "enabled",
];

/// Normalized event or weather effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    pub def_name: String,
    /// Raw label; may embed markup.
    pub label: String,
    pub label_markup: TrustedMarkup,
    /// `Some` for weather (possibly empty), `None` for events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_markup: Option<TrustedMarkup>,
    /// Unrounded source cost.
    pub base_cost: f64,
    pub karma_type: String,
    pub mod_source: String,
    pub mod_active: bool,
    pub enabled: bool,
}

impl IncidentRecord {
    /// Inclusion rule shared by events and weather.
    pub fn is_listed(&self) -> bool {
        self.enabled && self.base_cost > 0.0 && self.mod_active
    }
}

impl CatalogRecord for IncidentRecord {
    fn field_names(&self) -> &'static [&'static str] {
        if self.description.is_some() {
            WEATHER_FIELDS
        } else {
            EVENT_FIELDS
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "defName" => FieldValue::Text(&self.def_name),
            "label" => FieldValue::Text(&self.label),
            "description" => FieldValue::Text(self.description.as_deref()?),
            "baseCost" => FieldValue::Number(self.base_cost),
            "karmaType" => FieldValue::Text(&self.karma_type),
            "modSource" => FieldValue::Text(&self.mod_source),
            "modActive" => FieldValue::Flag(self.mod_active),
            "enabled" => FieldValue::Flag(self.enabled),
            _ => return None,
        };
        Some(value)
    }
}
