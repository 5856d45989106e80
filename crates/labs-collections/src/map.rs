//! Integer-keyed string map.

use std::collections::HashMap;
use std::fmt;

use log::trace;

/// A map from small integer keys to strings, backed by a [`HashMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapLab {
    entries: HashMap<i32, String>,
}

impl MapLab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key/value pair, returning the value it displaced.
    pub fn add(&mut self, key: i32, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        trace!("map insert {key}={value}");
        self.entries.insert(key, value)
    }

    /// Replaces the value stored under `key`.
    ///
    /// A missing key is inserted, same as [`MapLab::add`].
    pub fn overwrite(&mut self, key: i32, value: impl Into<String>) -> Option<String> {
        self.add(key, value)
    }

    #[must_use]
    pub fn get(&self, key: i32) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn remove(&mut self, key: i32) -> Option<String> {
        trace!("map remove {key}");
        self.entries.remove(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(i32, &str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }
}

impl fmt::Display for MapLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.sorted_entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}
