//! Race and derived xenotype records.
//!
//! # Invariants
//! - A xenotype's `def_name` is `{race_key}_{xenotype}` and its `name` is
//!   `{race_name} {xenotype}`.
//! - A xenotype inherits age bounds, genders and mod state from its race.
//! - A listed race or xenotype is enabled and its mod is active.

use super::field::{CatalogRecord, FieldValue};
use serde::Serialize;

/// Declared race field names (union of base and xenotype fields).
pub const RACE_FIELDS: &[&str] = &[
    "defName",
    "name",
    "basePrice",
    "isXenotype",
    "minAge",
    "maxAge",
    "allowedGenders",
    "enabled",
    "modActive",
    "allowCustomXenotypes",
    "defaultXenotype",
    "xenotypeCount",
    "parentRace",
    "xenotype",
    "xenotypePrice",
];

/// Gender availability for a race.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderSet {
    pub male: bool,
    pub female: bool,
    pub other: bool,
}

impl GenderSet {
    /// Lowercase names of the allowed genders.
    pub fn labels(&self) -> Vec<&'static str> {
        self.pick(["male", "female", "other"])
    }

    /// Single-letter markers (`M F O`) of the allowed genders.
    pub fn short_labels(&self) -> String {
        self.pick(["M", "F", "O"]).join(" ")
    }

    fn pick(&self, names: [&'static str; 3]) -> Vec<&'static str> {
        [self.male, self.female, self.other]
            .into_iter()
            .zip(names)
            .filter_map(|(allowed, name)| allowed.then_some(name))
            .collect()
    }
}

/// Base-race or xenotype specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RaceVariant {
    Base {
        allow_custom_xenotypes: bool,
        default_xenotype: String,
        /// Number of xenotypes derived from this race before filtering.
        xenotype_count: usize,
    },
    Xenotype {
        /// Display name of the parent race.
        parent_race: String,
        xenotype: String,
        xenotype_price: i64,
    },
}

/// Normalized race or xenotype entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRecord {
    pub def_name: String,
    pub name: String,
    pub base_price: i64,
    pub min_age: i64,
    pub max_age: i64,
    pub allowed_genders: GenderSet,
    pub enabled: bool,
    pub mod_active: bool,
    #[serde(flatten)]
    pub variant: RaceVariant,
}

impl RaceRecord {
    pub fn is_xenotype(&self) -> bool {
        matches!(self.variant, RaceVariant::Xenotype { .. })
    }

    /// Inclusion rule for races and xenotypes.
    pub fn is_listed(&self) -> bool {
        self.enabled && self.mod_active
    }
}

impl CatalogRecord for RaceRecord {
    fn field_names(&self) -> &'static [&'static str] {
        RACE_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match (name, &self.variant) {
            ("defName", _) => FieldValue::Text(&self.def_name),
            ("name", _) => FieldValue::Text(&self.name),
            ("basePrice", _) => FieldValue::Integer(self.base_price),
            ("isXenotype", _) => FieldValue::Flag(self.is_xenotype()),
            ("minAge", _) => FieldValue::Integer(self.min_age),
            ("maxAge", _) => FieldValue::Integer(self.max_age),
            ("allowedGenders", _) => FieldValue::List(self.allowed_genders.labels()),
            ("enabled", _) => FieldValue::Flag(self.enabled),
            ("modActive", _) => FieldValue::Flag(self.mod_active),
            (
                "allowCustomXenotypes",
                RaceVariant::Base {
                    allow_custom_xenotypes,
                    ..
                },
            ) => FieldValue::Flag(*allow_custom_xenotypes),
            ("defaultXenotype", RaceVariant::Base { default_xenotype, .. }) => {
                FieldValue::Text(default_xenotype)
            }
            ("xenotypeCount", RaceVariant::Base { xenotype_count, .. }) => {
                FieldValue::Integer(i64::try_from(*xenotype_count).unwrap_or(i64::MAX))
            }
            ("parentRace", RaceVariant::Xenotype { parent_race, .. }) => {
                FieldValue::Text(parent_race)
            }
            ("xenotype", RaceVariant::Xenotype { xenotype, .. }) => FieldValue::Text(xenotype),
            ("xenotypePrice", RaceVariant::Xenotype { xenotype_price, .. }) => {
                FieldValue::Integer(*xenotype_price)
            }
            _ => return None,
        };
        Some(value)
    }
}
