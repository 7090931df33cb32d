//! Event and weather normalizers.

use super::raw::RawEntry;
use super::{collect_entries, expect_mapping, NormalizeError, NormalizeOutcome};
use crate::markup::translate;
use crate::model::category::Category;
use crate::model::incident::IncidentRecord;
use serde_json::Value;

/// Raw mod-activity keys, browser spelling first. Only a literal `true`
/// marks the mod active.
const MOD_ACTIVE_KEYS: [&str; 2] = ["modactive", "ModActive"];

/// Normalizes a raw event document.
pub fn normalize_events(
    document: &Value,
) -> Result<NormalizeOutcome<IncidentRecord>, NormalizeError> {
    normalize_incidents(Category::Events, document)
}

/// Normalizes a raw weather document.
pub fn normalize_weather(
    document: &Value,
) -> Result<NormalizeOutcome<IncidentRecord>, NormalizeError> {
    normalize_incidents(Category::Weather, document)
}

fn normalize_incidents(
    category: Category,
    document: &Value,
) -> Result<NormalizeOutcome<IncidentRecord>, NormalizeError> {
    let entries = expect_mapping(category, document)?;
    Ok(collect_entries(
        category,
        entries,
        |entry| vec![incident_from_entry(category, entry)],
        IncidentRecord::is_listed,
    ))
}

fn incident_from_entry(category: Category, entry: &RawEntry<'_>) -> IncidentRecord {
    let label = entry.text_or_key(&["Label", "DefName"]);
    let description = (category == Category::Weather).then(|| entry.text_or(&["Description"], ""));

    IncidentRecord {
        def_name: entry.text_or_key(&["DefName"]),
        label_markup: translate(&label),
        label,
        description_markup: description.as_deref().map(translate),
        description,
        base_cost: entry.amount("BaseCost"),
        karma_type: entry.text_or(&["KarmaType"], "None"),
        mod_source: entry.text_or(&["ModSource"], "Unknown"),
        mod_active: matches!(
            entry.first_truthy(&MOD_ACTIVE_KEYS),
            Some(Value::Bool(true))
        ),
        enabled: entry.not_false("Enabled"),
    }
}
