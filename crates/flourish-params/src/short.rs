//! Short parameter maps.
//!
//! The flat `key -> string` mapping is the only serialization format of a
//! parameterized object. Insertion order is kept because it fixes the
//! layout of generated query strings.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParamError;

/// Insertion-ordered map of short keys to encoded values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortParams {
    entries: Vec<(String, String)>,
}

impl ShortParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`. A replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Inserts every entry of `other`, in its order.
    pub fn merge(&mut self, other: &ShortParams) {
        for (k, v) in other.iter() {
            self.insert(k, v);
        }
    }

    /// Renders `k=v&k=v` in insertion order.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parses a query string.
    ///
    /// A leading `?` and empty segments are ignored, later duplicates win
    /// and a segment without `=` gets an empty value. A segment with an
    /// empty key is rejected.
    pub fn from_query_string(query: &str) -> Result<Self, ParamError> {
        let query = query.trim();
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = ShortParams::new();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            if key.is_empty() {
                return Err(ParamError::MalformedQuery(segment.to_string()));
            }
            params.insert(key, value);
        }
        Ok(params)
    }

    /// Builds `route?query` with `extra` entries appended after the params.
    pub fn url(&self, route: &str, extra: &[(&str, String)]) -> String {
        let mut all = self.clone();
        for (k, v) in extra {
            all.insert(*k, v.clone());
        }
        format!("{}?{}", route, all.to_query_string())
    }
}

impl fmt::Display for ShortParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ShortParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ShortParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ShortParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl Serialize for ShortParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ShortParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShortParamsVisitor;

        impl<'de> Visitor<'de> for ShortParamsVisitor {
            type Value = ShortParams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of short parameter strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ShortParams, A::Error> {
                let mut params = ShortParams::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    params.insert(k, v);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ShortParamsVisitor)
    }
}
