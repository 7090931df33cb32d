//! Closed set of catalog categories.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use super::incident::{EVENT_FIELDS, WEATHER_FIELDS};
use super::item::ITEM_FIELDS;
use super::race::RACE_FIELDS;
use super::trait_record::TRAIT_FIELDS;

/// One of the five catalog kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Purchasable store items.
    Items,
    /// Triggerable incidents.
    Events,
    /// Weather effects.
    Weather,
    /// Character traits.
    Traits,
    /// Playable races and their xenotypes.
    Races,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Items,
        Category::Events,
        Category::Weather,
        Category::Traits,
        Category::Races,
    ];

    /// Stable lowercase identifier used in logs and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Events => "events",
            Self::Weather => "weather",
            Self::Traits => "traits",
            Self::Races => "races",
        }
    }

    /// Position of this category inside [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Items => 0,
            Self::Events => 1,
            Self::Weather => 2,
            Self::Traits => 3,
            Self::Races => 4,
        }
    }

    /// Field names declared by records of this category.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Items => ITEM_FIELDS,
            Self::Events => EVENT_FIELDS,
            Self::Weather => WEATHER_FIELDS,
            Self::Traits => TRAIT_FIELDS,
            Self::Races => RACE_FIELDS,
        }
    }

    /// Returns whether `field` is declared by this category.
    pub fn declares_field(self, field: &str) -> bool {
        self.field_names().contains(&field)
    }

    /// Parses a category identifier (case-insensitive, surrounding whitespace ignored).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
