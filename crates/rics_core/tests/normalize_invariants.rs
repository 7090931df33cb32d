use proptest::collection::vec;
use proptest::prelude::*;
use rics_core::normalize::{incidents, items, traits};
use serde_json::{json, Map, Value as Json};

/// Raw flag value as found in source documents; `None` leaves the key out.
fn raw_flag() -> impl Strategy<Value = Option<Json>> {
    prop_oneof![
        Just(None),
        Just(Some(Json::Null)),
        any::<bool>().prop_map(|flag| Some(Json::Bool(flag))),
        (0i64..=2).prop_map(|n| Some(json!(n))),
        prop_oneof![Just(""), Just("true"), Just("false"), Just("yes")]
            .prop_map(|text| Some(json!(text))),
    ]
}

/// Raw numeric amount, including fractions below one.
fn raw_amount() -> impl Strategy<Value = Option<Json>> {
    prop_oneof![
        Just(None),
        Just(Some(Json::Null)),
        any::<i64>().prop_map(|n| Some(json!(n))),
        (-1_000i64..1_000).prop_map(|n| Some(json!(n))),
        (0.0f64..1.0).prop_map(|n| Some(json!(n))),
        (-500.0f64..500.0).prop_map(|n| Some(json!(n))),
    ]
}

fn entry(fields: &[(&str, &Option<Json>)]) -> Json {
    let mut attrs = Map::new();
    for (name, value) in fields {
        if let Some(value) = value {
            attrs.insert(name.to_string(), value.clone());
        }
    }
    Json::Object(attrs)
}

fn truthy(value: &Option<Json>) -> bool {
    match value {
        None | Some(Json::Null) => false,
        Some(Json::Bool(flag)) => *flag,
        Some(Json::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Json::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

fn positive(value: &Option<Json>) -> bool {
    value.as_ref().and_then(Json::as_f64).is_some_and(|n| n > 0.0)
}

fn not_false(value: &Option<Json>) -> bool {
    !matches!(value, Some(Json::Bool(false)))
}

fn def_names<'a>(names: impl Iterator<Item = &'a String>) -> Vec<String> {
    names.cloned().collect()
}

proptest! {
    #[test]
    fn item_inclusion_follows_price_and_usage_rule(
        entries in vec((raw_amount(), raw_flag(), raw_flag(), raw_flag(), raw_flag()), 0..24)
    ) {
        let mut document = Map::new();
        let mut expected = Vec::new();
        for (index, (price, enabled, usable, equippable, wearable)) in entries.iter().enumerate() {
            let key = format!("Item{index:02}");
            document.insert(
                key.clone(),
                entry(&[
                    ("BasePrice", price),
                    ("Enabled", enabled),
                    ("IsUsable", usable),
                    ("IsEquippable", equippable),
                    ("IsWearable", wearable),
                ]),
            );
            let usage = [usable, equippable, wearable]
                .into_iter()
                .any(|flag| truthy(flag));
            if (not_false(enabled) || usage) && positive(price) {
                expected.push(key);
            }
        }

        let outcome = items::normalize(&Json::Object(document)).unwrap();
        prop_assert_eq!(def_names(outcome.records.iter().map(|item| &item.def_name)), expected);
        prop_assert_eq!(outcome.records.len() + outcome.excluded, entries.len());
        prop_assert!(outcome
            .records
            .iter()
            .all(|item| item.price > 0.0 && (item.enabled || item.has_usage())));
    }

    #[test]
    fn incident_inclusion_requires_literal_true_mod_flag(
        entries in vec((raw_amount(), raw_flag(), raw_flag(), raw_flag()), 0..24)
    ) {
        let mut document = Map::new();
        let mut expected = Vec::new();
        for (index, (cost, enabled, mod_active, mod_active_alias)) in entries.iter().enumerate() {
            let key = format!("Incident{index:02}");
            document.insert(
                key.clone(),
                entry(&[
                    ("BaseCost", cost),
                    ("Enabled", enabled),
                    ("modactive", mod_active),
                    ("ModActive", mod_active_alias),
                ]),
            );
            let active = [mod_active, mod_active_alias]
                .into_iter()
                .find(|value| truthy(value));
            if not_false(enabled)
                && positive(cost)
                && matches!(active, Some(Some(Json::Bool(true))))
            {
                expected.push(key);
            }
        }

        let document = Json::Object(document);
        for outcome in [
            incidents::normalize_events(&document).unwrap(),
            incidents::normalize_weather(&document).unwrap(),
        ] {
            prop_assert_eq!(
                def_names(outcome.records.iter().map(|record| &record.def_name)),
                expected.clone()
            );
            prop_assert_eq!(outcome.records.len() + outcome.excluded, entries.len());
        }
    }

    #[test]
    fn trait_inclusion_needs_an_operation_and_a_price(
        entries in vec((raw_flag(), raw_flag(), raw_amount(), raw_amount()), 0..24)
    ) {
        let mut document = Map::new();
        let mut expected = Vec::new();
        for (index, (can_add, can_remove, add_price, remove_price)) in entries.iter().enumerate() {
            let key = format!("Trait{index:02}");
            document.insert(
                key.clone(),
                entry(&[
                    ("CanAdd", can_add),
                    ("CanRemove", can_remove),
                    ("AddPrice", add_price),
                    ("RemovePrice", remove_price),
                ]),
            );
            let operation = truthy(can_add) || truthy(can_remove);
            let priced = positive(add_price) || positive(remove_price);
            if operation && priced {
                expected.push(key);
            }
        }

        let outcome = traits::normalize(&Json::Object(document)).unwrap();
        prop_assert_eq!(
            def_names(outcome.records.iter().map(|record| &record.def_name)),
            expected
        );
        prop_assert_eq!(outcome.records.len() + outcome.excluded, entries.len());
    }
}

#[test]
fn active_priced_event_is_excluded_when_mod_inactive() {
    let document = json!({ "Raid": { "BaseCost": 50, "Enabled": true, "modactive": false } });
    assert!(incidents::normalize_events(&document)
        .unwrap()
        .records
        .is_empty());
}

#[test]
fn numeric_mod_flag_does_not_activate_event() {
    let document = json!({ "Raid": { "BaseCost": 50, "Enabled": true, "modactive": 1 } });
    let outcome = incidents::normalize_events(&document).unwrap();
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.excluded, 1);
}

#[test]
fn sub_unit_item_price_is_listed() {
    let outcome = items::normalize(&json!({ "Dust": { "BasePrice": 0.4 } })).unwrap();
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.excluded, 0);
}
