//! Race normalizer with xenotype expansion.
//!
//! # Invariants
//! - Each enabled xenotype with a price entry yields exactly one derived record placed
//!   directly after its base race.
//! - `xenotype_count` on the base race counts derived records before the
//!   inclusion rule is applied.

use super::raw::{is_truthy, number_as_i64, RawEntry};
use super::{collect_entries, expect_mapping, NormalizeError, NormalizeOutcome};
use crate::model::category::Category;
use crate::model::race::{GenderSet, RaceRecord, RaceVariant};
use serde_json::{Map, Value};

/// Normalizes a raw race document, expanding xenotypes.
pub fn normalize(document: &Value) -> Result<NormalizeOutcome<RaceRecord>, NormalizeError> {
    let entries = expect_mapping(Category::Races, document)?;
    Ok(collect_entries(
        Category::Races,
        entries,
        expand_race,
        RaceRecord::is_listed,
    ))
}

/// Builds the base race followed by its derived xenotypes.
pub fn expand_race(entry: &RawEntry<'_>) -> Vec<RaceRecord> {
    let race_key = entry.key();
    let name = entry.text_or_key(&["DisplayName"]);
    let min_age = entry.integer("MinAge");
    let max_age = entry.integer("MaxAge");
    let mod_active = entry.not_false("ModActive");
    let allowed_genders = entry
        .mapping("AllowedGenders")
        .map(genders_from_mapping)
        .unwrap_or_default();

    let xenotypes = derive_xenotypes(entry)
        .into_iter()
        .map(|(xenotype, price)| RaceRecord {
            def_name: format!("{race_key}_{xenotype}"),
            name: format!("{name} {xenotype}"),
            base_price: price,
            min_age,
            max_age,
            allowed_genders,
            enabled: true,
            mod_active,
            variant: RaceVariant::Xenotype {
                parent_race: name.clone(),
                xenotype,
                xenotype_price: price,
            },
        })
        .collect::<Vec<_>>();

    let base = RaceRecord {
        def_name: race_key.to_string(),
        name: name.clone(),
        base_price: entry.integer("BasePrice"),
        min_age,
        max_age,
        allowed_genders,
        enabled: entry.not_false("Enabled"),
        mod_active,
        variant: RaceVariant::Base {
            allow_custom_xenotypes: entry.flag("AllowCustomXenotypes"),
            default_xenotype: entry.text_or(&["DefaultXenotype"], "None"),
            xenotype_count: xenotypes.len(),
        },
    };

    let mut records = Vec::with_capacity(xenotypes.len() + 1);
    records.push(base);
    records.extend(xenotypes);
    records
}

/// Enabled xenotypes with a price entry, in `EnabledXenotypes` order.
///
/// A present but non-numeric price resolves to `0`.
fn derive_xenotypes(entry: &RawEntry<'_>) -> Vec<(String, i64)> {
    let (Some(enabled), Some(prices)) = (
        entry.mapping("EnabledXenotypes"),
        entry.mapping("XenotypePrices"),
    ) else {
        return Vec::new();
    };

    enabled
        .iter()
        .filter(|(_, flag)| is_truthy(flag))
        .filter_map(|(xenotype, _)| {
            let price = prices.get(xenotype)?;
            Some((xenotype.clone(), number_as_i64(price).unwrap_or(0)))
        })
        .collect()
}

fn genders_from_mapping(raw: &Map<String, Value>) -> GenderSet {
    let allowed = |key: &str| raw.get(key).is_some_and(is_truthy);
    GenderSet {
        male: allowed("AllowMale"),
        female: allowed("AllowFemale"),
        other: allowed("AllowOther"),
    }
}
