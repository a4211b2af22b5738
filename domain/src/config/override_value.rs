//! Override values supplied by configuration sources

use super::config_key::lookup_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dynamically-typed value an override source may supply for a key.
///
/// Sources are untyped (TOML, environment), so the value's shape is only
/// checked against the schema when it is merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    /// Explicit unset (`null`).
    Clear,
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<OverrideValue>),
    Table(BTreeMap<String, OverrideValue>),
}

impl OverrideValue {
    /// Type name used in mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            OverrideValue::Clear => "null",
            OverrideValue::Flag(_) => "boolean",
            OverrideValue::Integer(_) => "integer",
            OverrideValue::Float(_) => "float",
            OverrideValue::Text(_) => "string",
            OverrideValue::List(_) => "array",
            OverrideValue::Table(_) => "table",
        }
    }
}

impl From<bool> for OverrideValue {
    fn from(value: bool) -> Self {
        OverrideValue::Flag(value)
    }
}

impl From<&str> for OverrideValue {
    fn from(value: &str) -> Self {
        OverrideValue::Text(value.to_string())
    }
}

impl From<String> for OverrideValue {
    fn from(value: String) -> Self {
        OverrideValue::Text(value)
    }
}

/// A set of overrides keyed by the raw key the source used.
///
/// Keys are kept as written; resolution against the schema happens at
/// merge time so unknown keys can be reported instead of dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigOverrides {
    entries: BTreeMap<String, OverrideValue>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OverrideValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value; returns the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OverrideValue>,
    ) -> Option<OverrideValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&OverrideValue> {
        self.entries.get(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OverrideValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite every known key to its camelCase spelling.
    ///
    /// Unknown keys are kept as written. When both spellings of a field
    /// are present, the one later in key order (snake_case) wins.
    pub fn canonicalize(self) -> Self {
        self.entries
            .into_iter()
            .map(|(key, value)| match lookup_key(&key) {
                Some(info) => (info.key.to_string(), value),
                None => (key, value),
            })
            .collect()
    }

    /// Lay `upper` over `self`: keys set in both take `upper`'s value.
    ///
    /// Both sides should be canonicalized first, otherwise two spellings of
    /// one field survive side by side.
    pub fn overlay(&mut self, upper: ConfigOverrides) {
        self.entries.extend(upper.entries);
    }
}

impl<K: Into<String>, V: Into<OverrideValue>> FromIterator<(K, V)> for ConfigOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = ConfigOverrides::new();
        for (key, value) in iter {
            overrides.insert(key, value);
        }
        overrides
    }
}
