//! Purchasable store item record.
//!
//! # Invariants
//! - A listed item has `price > 0`.
//! - A listed item is enabled or has at least one usage flag set.

use super::field::{CatalogRecord, FieldValue};
use serde::{Serialize, Serializer};

/// Wire value of [`QuantityLimit::Unlimited`].
pub const UNLIMITED_LABEL: &str = "Unlimited";

/// Declared item field names.
pub const ITEM_FIELDS: &[&str] = &[
    "defName",
    "name",
    "price",
    "category",
    "quantityLimit",
    "limitMode",
    "mod",
    "isUsable",
    "isEquippable",
    "isWearable",
    "enabled",
];

/// Per-purchase quantity cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityLimit {
    Limited(i64),
    Unlimited,
}

impl QuantityLimit {
    pub fn as_field(self) -> FieldValue<'static> {
        match self {
            Self::Limited(limit) => FieldValue::Integer(limit),
            Self::Unlimited => FieldValue::Unlimited,
        }
    }
}

impl Serialize for QuantityLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Limited(limit) => serializer.serialize_i64(*limit),
            Self::Unlimited => serializer.serialize_str(UNLIMITED_LABEL),
        }
    }
}

/// Normalized store item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub def_name: String,
    pub name: String,
    /// Unrounded source price.
    pub price: f64,
    pub category: String,
    pub quantity_limit: QuantityLimit,
    pub limit_mode: Option<String>,
    /// Source mod attribution. Serialized as `mod`.
    #[serde(rename = "mod")]
    pub mod_name: String,
    pub is_usable: bool,
    pub is_equippable: bool,
    pub is_wearable: bool,
    pub enabled: bool,
}

impl ItemRecord {
    /// Returns whether any usage flag is set.
    pub fn has_usage(&self) -> bool {
        self.is_usable || self.is_equippable || self.is_wearable
    }

    /// Inclusion rule for the item catalog.
    pub fn is_listed(&self) -> bool {
        (self.enabled || self.has_usage()) && self.price > 0.0
    }

    /// Human-readable usage labels in fixed order.
    pub fn usage_types(&self) -> Vec<&'static str> {
        let mut types = Vec::new();
        if self.is_usable {
            types.push("Usable");
        }
        if self.is_equippable {
            types.push("Equippable");
        }
        if self.is_wearable {
            types.push("Wearable");
        }
        types
    }
}

impl CatalogRecord for ItemRecord {
    fn field_names(&self) -> &'static [&'static str] {
        ITEM_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "defName" => FieldValue::Text(&self.def_name),
            "name" => FieldValue::Text(&self.name),
            "price" => FieldValue::Number(self.price),
            "category" => FieldValue::Text(&self.category),
            "quantityLimit" => self.quantity_limit.as_field(),
            "limitMode" => FieldValue::Text(self.limit_mode.as_deref()?),
            "mod" => FieldValue::Text(&self.mod_name),
            "isUsable" => FieldValue::Flag(self.is_usable),
            "isEquippable" => FieldValue::Flag(self.is_equippable),
            "isWearable" => FieldValue::Flag(self.is_wearable),
            "enabled" => FieldValue::Flag(self.enabled),
            _ => return None,
        };
        Some(value)
    }
}
