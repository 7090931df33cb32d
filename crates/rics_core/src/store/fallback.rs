//! Per-category fallback policy for failed loads.

use crate::model::category::Category;
use crate::model::item::{ItemRecord, QuantityLimit};
use crate::model::record::Record;
use serde::Serialize;

/// Records used in place of a category that failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Built-in sample records (only Items ships samples).
    SampleData,
    /// No records.
    Empty,
}

impl FallbackPolicy {
    /// Records this policy yields for `category`.
    pub fn records(self, category: Category) -> Vec<Record> {
        match (self, category) {
            (Self::SampleData, Category::Items) => {
                sample_items().into_iter().map(Record::Item).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Fallback policy for every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTable {
    policies: [FallbackPolicy; 5],
}

impl Default for FallbackTable {
    /// Items fall back to samples; every other category falls back to empty.
    fn default() -> Self {
        Self::uniform(FallbackPolicy::Empty).with_policy(Category::Items, FallbackPolicy::SampleData)
    }
}

impl FallbackTable {
    /// Table applying the same policy to every category.
    pub fn uniform(policy: FallbackPolicy) -> Self {
        Self {
            policies: [policy; 5],
        }
    }

    pub fn with_policy(mut self, category: Category, policy: FallbackPolicy) -> Self {
        self.policies[category.index()] = policy;
        self
    }

    pub fn policy(&self, category: Category) -> FallbackPolicy {
        self.policies[category.index()]
    }
}

/// Built-in item samples shown when the item source is unavailable.
pub fn sample_items() -> Vec<ItemRecord> {
    [("TextBook", "Textbook", 267.0), ("Schematic", "Schematic", 250.0)]
        .into_iter()
        .map(|(def_name, name, price)| ItemRecord {
            def_name: def_name.to_string(),
            name: name.to_string(),
            price,
            category: "Books".to_string(),
            quantity_limit: QuantityLimit::Limited(5),
            limit_mode: Some("OneStack".to_string()),
            mod_name: "Core".to_string(),
            is_usable: false,
            is_equippable: false,
            is_wearable: false,
            enabled: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{sample_items, FallbackPolicy, FallbackTable};
    use crate::model::category::Category;

    #[test]
    fn default_table_only_samples_items() {
        let table = FallbackTable::default();
        assert_eq!(table.policy(Category::Items), FallbackPolicy::SampleData);
        for category in [
            Category::Events,
            Category::Weather,
            Category::Traits,
            Category::Races,
        ] {
            assert_eq!(table.policy(category), FallbackPolicy::Empty);
        }
    }

    #[test]
    fn samples_exist_only_for_items() {
        assert_eq!(FallbackPolicy::SampleData.records(Category::Items).len(), 2);
        assert!(FallbackPolicy::SampleData.records(Category::Traits).is_empty());
        assert!(FallbackPolicy::Empty.records(Category::Items).is_empty());
    }

    #[test]
    fn sample_items_satisfy_item_inclusion_rule() {
        assert!(sample_items().iter().all(|item| item.is_listed()));
    }
}
