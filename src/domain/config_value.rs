// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved configuration values.
//!
//! This module provides [`ConfigValue`], the typed value a leaf resolves to, and
//! [`Record`], the nested, declaration-ordered record a group resolves to.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A resolved configuration value.
///
/// Leaves resolve to one of the scalar variants, groups resolve to a
/// [`Record`].
///
/// # Examples
///
/// ```
/// use paramcfg::domain::ConfigValue;
///
/// let value = ConfigValue::from(22);
/// assert_eq!(value.as_i64(), Some(22));
/// assert_eq!(value.as_str(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    /// A string leaf.
    String(String),
    /// An integer leaf.
    Integer(i64),
    /// A boolean leaf.
    Boolean(bool),
    /// A nested group.
    Record(Record),
}

impl ConfigValue {
    /// Returns the string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested record if this is a group value.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            ConfigValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// A short name for the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Record(_) => "record",
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Boolean(b)
    }
}

impl From<Record> for ConfigValue {
    fn from(r: Record) -> Self {
        ConfigValue::Record(r)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
            ConfigValue::Record(r) => write!(f, "{}", r),
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ConfigValue::String(s) => serializer.serialize_str(s),
            ConfigValue::Integer(n) => serializer.serialize_i64(*n),
            ConfigValue::Boolean(b) => serializer.serialize_bool(*b),
            ConfigValue::Record(r) => r.serialize(serializer),
        }
    }
}

/// A resolved group: field names mapped to values, in declaration order.
///
/// An optional leaf with no parameter and no default is kept as an entry whose
/// value is `None`.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::{ConfigValue, Record};
///
/// let mut record = Record::new();
/// record.insert("email", Some(ConfigValue::from("winning@life.com")));
/// record.insert("nickname", None);
///
/// assert_eq!(record.get_str("email"), Some("winning@life.com"));
/// assert!(record.contains("nickname"));
/// assert_eq!(record.get("nickname"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(String, Option<ConfigValue>)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts or replaces an entry. A new name is appended at the end.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<ConfigValue>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value for `name`, or `None` if the entry is absent or unset.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Returns true if the record has an entry for `name`, set or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Returns the string value for `name`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ConfigValue::as_str)
    }

    /// Returns the integer value for `name`.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ConfigValue::as_i64)
    }

    /// Returns the boolean value for `name`.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ConfigValue::as_bool)
    }

    /// Returns the nested record for `name`.
    pub fn get_record(&self, name: &str) -> Option<&Record> {
        self.get(name).and_then(ConfigValue::as_record)
    }

    /// Iterates over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ConfigValue>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Option<ConfigValue>)> {
        self.entries
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(v) => write!(f, "{}: {}", name, v)?,
                None => write!(f, "{}: <absent>", name)?,
            }
        }
        write!(f, "}}")
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
