//! Lenient accessors over one raw source entry.
//!
//! Raw values follow loose truthiness: `null`, `false`, `0`, `""` and
//! missing keys all count as absent when a default applies.

use serde_json::{Map, Value};

/// One source entry: its stable key and raw attribute mapping.
pub struct RawEntry<'a> {
    key: &'a str,
    attrs: &'a Map<String, Value>,
}

impl<'a> RawEntry<'a> {
    /// Returns `None` when `value` is not an attribute mapping.
    pub fn new(key: &'a str, value: &'a Value) -> Option<Self> {
        value.as_object().map(|attrs| Self { key, attrs })
    }

    /// Stable source key of this entry.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Raw value of `name` when it is present and truthy.
    pub fn truthy(&self, name: &str) -> Option<&'a Value> {
        self.attrs.get(name).filter(|value| is_truthy(value))
    }

    /// First truthy raw value among `names`.
    pub fn first_truthy(&self, names: &[&str]) -> Option<&'a Value> {
        names.iter().find_map(|name| self.truthy(name))
    }

    /// First truthy textual value among `names`.
    pub fn text(&self, names: &[&str]) -> Option<String> {
        names
            .iter()
            .find_map(|name| self.truthy(name).and_then(scalar_text))
    }

    /// First truthy textual value among `names`, else `fallback`.
    pub fn text_or(&self, names: &[&str], fallback: &str) -> String {
        self.text(names).unwrap_or_else(|| fallback.to_string())
    }

    /// First truthy textual value among `names`, else the entry key.
    pub fn text_or_key(&self, names: &[&str]) -> String {
        self.text_or(names, self.key)
    }

    /// Boolean with `false` default.
    pub fn flag(&self, name: &str) -> bool {
        self.truthy(name).is_some()
    }

    /// Boolean with `true` default: only a literal `false` disables.
    pub fn not_false(&self, name: &str) -> bool {
        !matches!(self.attrs.get(name), Some(Value::Bool(false)))
    }

    /// Unrounded amount with `0` default; non-numeric values count as `0`.
    pub fn amount(&self, name: &str) -> f64 {
        self.truthy(name).and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// Integer with `0` default. Fractional values round half up.
    pub fn integer(&self, name: &str) -> i64 {
        self.truthy(name).and_then(number_as_i64).unwrap_or(0)
    }

    /// List of text lines; non-list values resolve to an empty list.
    pub fn text_list(&self, name: &str) -> Vec<String> {
        match self.attrs.get(name) {
            Some(Value::Array(values)) => values.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        }
    }

    /// Nested attribute mapping, if present.
    pub fn mapping(&self, name: &str) -> Option<&'a Map<String, Value>> {
        self.attrs.get(name).and_then(Value::as_object)
    }
}

/// Loose truthiness for raw JSON values.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Rounds to the nearest integer, halves rounding towards positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Numeric value as an integer, rounding fractional values.
pub fn number_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(round_half_up)),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
