//! Character trait normalizer.

use super::raw::RawEntry;
use super::{collect_entries, expect_mapping, NormalizeError, NormalizeOutcome};
use crate::markup::{substitute_placeholders, translate, translate_all};
use crate::model::category::Category;
use crate::model::trait_record::TraitRecord;
use serde_json::Value;

/// Normalizes a raw trait document.
pub fn normalize(document: &Value) -> Result<NormalizeOutcome<TraitRecord>, NormalizeError> {
    let entries = expect_mapping(Category::Traits, document)?;
    Ok(collect_entries(
        Category::Traits,
        entries,
        |entry| vec![trait_from_entry(entry)],
        TraitRecord::is_listed,
    ))
}

fn trait_from_entry(entry: &RawEntry<'_>) -> TraitRecord {
    let name = entry.text_or_key(&["Name", "DefName"]);
    let description = substitute_placeholders(&entry.text_or(&["Description"], ""));
    let stats = entry.text_list("Stats");
    let conflicts = entry.text_list("Conflicts");

    TraitRecord {
        def_name: entry.text_or_key(&["DefName"]),
        name_markup: translate(&name),
        name,
        description_markup: translate(&description),
        description,
        stats_markup: translate_all(&stats),
        stats,
        conflicts_markup: translate_all(&conflicts),
        conflicts,
        can_add: entry.flag("CanAdd"),
        can_remove: entry.flag("CanRemove"),
        add_price: entry.amount("AddPrice"),
        remove_price: entry.amount("RemovePrice"),
        bypass_limit: entry.flag("BypassLimit"),
        mod_source: entry.text_or(&["ModSource"], "Unknown"),
    }
}
