//! Uniform field view shared by every record type.
//!
//! # Invariants
//! - Field enumeration is explicit per record type, never runtime reflection.
//! - `FieldValue::compare` is total: mismatched variants order by variant rank.
//! - `Integer` and `Number` compare numerically with each other.

use std::cmp::Ordering;

/// Borrowed value of one declared record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    /// Unrounded source amount, such as an item price.
    Number(f64),
    Flag(bool),
    List(Vec<&'a str>),
    /// Sentinel for an unbounded quantity. Orders above every integer.
    Unlimited,
}

impl FieldValue<'_> {
    /// Lowercased text used for substring search.
    ///
    /// Returns `None` for empty-ish values (`""`, `0`, `false`), which never
    /// participate in search matches.
    pub fn search_text(&self) -> Option<String> {
        match self {
            Self::Text(value) if value.is_empty() => None,
            Self::Text(value) => Some(value.to_lowercase()),
            Self::Integer(0) => None,
            Self::Integer(value) => Some(value.to_string()),
            Self::Number(value) if *value == 0.0 => None,
            Self::Number(value) => Some(value.to_string()),
            Self::Flag(false) => None,
            Self::Flag(true) => Some("true".to_string()),
            Self::List(values) => Some(values.join(",").to_lowercase()),
            Self::Unlimited => Some("unlimited".to_string()),
        }
    }

    /// Compares two values of the same field.
    ///
    /// Text compares case-insensitively. `Unlimited` is greater than any number.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.to_lowercase().cmp(&right.to_lowercase()),
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (Self::Number(left), Self::Number(right)) => left.total_cmp(right),
            (Self::Integer(left), Self::Number(right)) => (*left as f64).total_cmp(right),
            (Self::Number(left), Self::Integer(right)) => left.total_cmp(&(*right as f64)),
            (Self::Unlimited, Self::Unlimited) => Ordering::Equal,
            (Self::Unlimited, Self::Integer(_) | Self::Number(_)) => Ordering::Greater,
            (Self::Integer(_) | Self::Number(_), Self::Unlimited) => Ordering::Less,
            (Self::Flag(left), Self::Flag(right)) => left.cmp(right),
            (Self::List(left), Self::List(right)) => left
                .join(",")
                .to_lowercase()
                .cmp(&right.join(",").to_lowercase()),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Flag(_) => 0,
            Self::Integer(_) | Self::Number(_) => 1,
            Self::Unlimited => 2,
            Self::Text(_) => 3,
            Self::List(_) => 4,
        }
    }
}

/// Record abstraction consumed by the query engine.
pub trait CatalogRecord {
    /// Declared field names in enumeration order.
    fn field_names(&self) -> &'static [&'static str];

    /// Value of one declared field, or `None` when the field does not apply
    /// to this record (e.g. `parentRace` on a base race).
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Every present field with its value.
    fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        self.field_names()
            .iter()
            .filter_map(|name| self.field(name).map(|value| (*name, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;
    use std::cmp::Ordering;

    #[test]
    fn text_compare_ignores_case() {
        assert_eq!(
            FieldValue::Text("apple").compare(&FieldValue::Text("Banana")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("ABC").compare(&FieldValue::Text("abc")),
            Ordering::Equal
        );
    }

    #[test]
    fn unlimited_is_greater_than_any_integer() {
        assert_eq!(
            FieldValue::Unlimited.compare(&FieldValue::Integer(i64::MAX)),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Integer(0).compare(&FieldValue::Unlimited),
            Ordering::Less
        );
    }

    #[test]
    fn fractional_amounts_compare_and_search_unrounded() {
        assert_eq!(
            FieldValue::Number(0.4).compare(&FieldValue::Integer(1)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Number(12.5).compare(&FieldValue::Number(12.25)),
            Ordering::Greater
        );
        assert_eq!(FieldValue::Number(0.4).search_text().as_deref(), Some("0.4"));
        assert_eq!(FieldValue::Number(12.0).search_text().as_deref(), Some("12"));
        assert_eq!(FieldValue::Number(0.0).search_text(), None);
    }

    #[test]
    fn empty_values_have_no_search_text() {
        assert_eq!(FieldValue::Text("").search_text(), None);
        assert_eq!(FieldValue::Integer(0).search_text(), None);
        assert_eq!(FieldValue::Flag(false).search_text(), None);
        assert_eq!(FieldValue::Flag(true).search_text().as_deref(), Some("true"));
        assert_eq!(
            FieldValue::List(vec!["Kind", "Tough"]).search_text().as_deref(),
            Some("kind,tough")
        );
    }
}
