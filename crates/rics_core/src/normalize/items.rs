//! Store item normalizer.
//!
//! Accepts both a flat mapping and one wrapped under an `items` key.

use super::raw::{is_truthy, RawEntry};
use super::{collect_entries, expect_mapping, NormalizeError, NormalizeOutcome};
use crate::model::category::Category;
use crate::model::item::{ItemRecord, QuantityLimit};
use serde_json::Value;

const WRAPPER_KEY: &str = "items";

/// Normalizes a raw item document.
pub fn normalize(document: &Value) -> Result<NormalizeOutcome<ItemRecord>, NormalizeError> {
    let entries = expect_mapping(Category::Items, unwrap_items(document))?;
    Ok(collect_entries(
        Category::Items,
        entries,
        |entry| vec![item_from_entry(entry)],
        ItemRecord::is_listed,
    ))
}

fn unwrap_items(document: &Value) -> &Value {
    match document.get(WRAPPER_KEY) {
        Some(inner) if is_truthy(inner) => inner,
        _ => document,
    }
}

/// Resolves one raw item with defaults; inclusion is decided by the caller.
pub fn item_from_entry(entry: &RawEntry<'_>) -> ItemRecord {
    let quantity_limit = if entry.flag("HasQuantityLimit") {
        QuantityLimit::Limited(entry.integer("QuantityLimit"))
    } else {
        QuantityLimit::Unlimited
    };

    ItemRecord {
        def_name: entry.text_or_key(&["DefName"]),
        name: entry.text_or_key(&["CustomName", "DefName"]),
        price: entry.amount("BasePrice"),
        category: entry.text_or(&["Category"], "Misc"),
        quantity_limit,
        limit_mode: entry.text(&["LimitMode"]),
        mod_name: entry.text_or(&["Mod"], "Unknown"),
        is_usable: entry.flag("IsUsable"),
        is_equippable: entry.flag("IsEquippable"),
        is_wearable: entry.flag("IsWearable"),
        enabled: entry.not_false("Enabled"),
    }
}
