use rics_core::{
    CatalogConfig, CatalogStore, Category, CategoryLoad, DirectorySource, FallbackPolicy, Record,
};
use serde_json::json;
use std::path::Path;

fn write_json(dir: &Path, file_name: &str, value: serde_json::Value) {
    std::fs::write(dir.join(file_name), value.to_string()).unwrap();
}

fn seed_data_dir(dir: &Path) {
    write_json(
        dir,
        "StoreItems.json",
        json!({ "Beer": { "BasePrice": 12 }, "Free": { "BasePrice": 0 } }),
    );
    write_json(
        dir,
        "Incidents.json",
        json!({ "Gift": { "BaseCost": 100, "modactive": true } }),
    );
    write_json(
        dir,
        "Weather.json",
        json!({ "Fog": { "BaseCost": 50, "modactive": true, "Description": "grey" } }),
    );
    write_json(
        dir,
        "Traits.json",
        json!({ "Kind": { "CanAdd": true, "AddPrice": 10 } }),
    );
    write_json(
        dir,
        "RaceSettings.json",
        json!({
            "Human": {
                "EnabledXenotypes": { "Hussar": true, "Genie": true },
                "XenotypePrices": { "Hussar": 120.5, "Genie": 80 }
            }
        }),
    );
}

#[test]
fn loads_catalog_from_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    seed_data_dir(dir.path());

    let source = DirectorySource::new(&CatalogConfig::with_data_dir(dir.path()));
    let store = CatalogStore::load(&source, |_: Category, _: &[Record]| {});

    assert!(!store.load_report().is_degraded());
    assert_eq!(store.full(Category::Items).len(), 1);
    assert_eq!(
        store.load_report().get(Category::Items),
        Some(&CategoryLoad::Loaded {
            records: 1,
            skipped: 0,
            excluded: 1,
        })
    );

    let races: Vec<_> = store
        .full(Category::Races)
        .iter()
        .filter_map(Record::as_race)
        .map(|race| (race.def_name.as_str(), race.base_price))
        .collect();
    assert_eq!(
        races,
        vec![("Human", 0), ("Human_Hussar", 121), ("Human_Genie", 80)]
    );
}

#[test]
fn config_file_selects_custom_file_names() {
    let dir = tempfile::tempdir().unwrap();
    seed_data_dir(dir.path());
    std::fs::rename(
        dir.path().join("Weather.json"),
        dir.path().join("WeatherEffects.json"),
    )
    .unwrap();

    let config_path = dir.path().join("catalog.json");
    write_json(
        dir.path(),
        "catalog.json",
        json!({
            "data_dir": dir.path(),
            "sources": { "weather": "WeatherEffects.json" },
            "logging": { "level": "warn" }
        }),
    );

    let config = CatalogConfig::from_path(&config_path).unwrap();
    let store = CatalogStore::load(&DirectorySource::new(&config), |_: Category, _: &[Record]| {});

    let fog = store.full(Category::Weather)[0].as_incident().unwrap();
    assert_eq!(fog.description.as_deref(), Some("grey"));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn missing_items_file_degrades_to_samples() {
    let dir = tempfile::tempdir().unwrap();
    seed_data_dir(dir.path());
    std::fs::remove_file(dir.path().join("StoreItems.json")).unwrap();

    let source = DirectorySource::new(&CatalogConfig::with_data_dir(dir.path()));
    let store = CatalogStore::load(&source, |_: Category, _: &[Record]| {});

    assert_eq!(store.full(Category::Items).len(), 2);
    assert_eq!(store.full(Category::Events).len(), 1);
    assert!(matches!(
        store.load_report().get(Category::Items),
        Some(CategoryLoad::FallbackApplied {
            policy: FallbackPolicy::SampleData,
            ..
        })
    ));
}
