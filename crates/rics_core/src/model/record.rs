//! Category-tagged record wrapper held by the catalog store.

use super::category::Category;
use super::field::{CatalogRecord, FieldValue};
use super::incident::IncidentRecord;
use super::item::ItemRecord;
use super::race::RaceRecord;
use super::trait_record::TraitRecord;
use serde::Serialize;

/// One normalized catalog entry of any category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Item(ItemRecord),
    Event(IncidentRecord),
    Weather(IncidentRecord),
    Trait(TraitRecord),
    Race(RaceRecord),
}

impl Record {
    pub fn category(&self) -> Category {
        match self {
            Self::Item(_) => Category::Items,
            Self::Event(_) => Category::Events,
            Self::Weather(_) => Category::Weather,
            Self::Trait(_) => Category::Traits,
            Self::Race(_) => Category::Races,
        }
    }

    /// Stable identity (`defName`) of the entry.
    pub fn def_name(&self) -> &str {
        match self {
            Self::Item(item) => &item.def_name,
            Self::Event(incident) | Self::Weather(incident) => &incident.def_name,
            Self::Trait(record) => &record.def_name,
            Self::Race(race) => &race.def_name,
        }
    }

    /// Raw display name (`name` or `label`, depending on category).
    pub fn display_name(&self) -> &str {
        match self {
            Self::Item(item) => &item.name,
            Self::Event(incident) | Self::Weather(incident) => &incident.label,
            Self::Trait(record) => &record.name,
            Self::Race(race) => &race.name,
        }
    }

    pub fn as_item(&self) -> Option<&ItemRecord> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_incident(&self) -> Option<&IncidentRecord> {
        match self {
            Self::Event(incident) | Self::Weather(incident) => Some(incident),
            _ => None,
        }
    }

    pub fn as_trait(&self) -> Option<&TraitRecord> {
        match self {
            Self::Trait(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_race(&self) -> Option<&RaceRecord> {
        match self {
            Self::Race(race) => Some(race),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn CatalogRecord {
        match self {
            Self::Item(item) => item,
            Self::Event(incident) | Self::Weather(incident) => incident,
            Self::Trait(record) => record,
            Self::Race(race) => race,
        }
    }
}

impl CatalogRecord for Record {
    fn field_names(&self) -> &'static [&'static str] {
        self.inner().field_names()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.inner().field(name)
    }
}
