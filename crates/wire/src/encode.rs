//! Field encoder: record to ordered key/value params
//!
//! Walks a record's field table in declaration order and emits
//! `(external name, rendered text)` for every field that is transmitted and
//! not omitted. No escaping is applied; that belongs to the transport.

use tracing::{debug, trace};

use crate::field::Record;

/// Ordered key/value text pairs
///
/// Keeps insertion order so that callers signing or serializing the params
/// see the same order on every call for a given record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Empty params
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Value of the first pair with `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when a pair with `key` exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no pairs
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Encode `record` into params. Never fails.
pub fn encode<R: Record>(record: &R) -> Params {
    let mut params = Params::new();

    for field in R::fields() {
        if !field.is_transmitted() {
            debug!(target: "multisend::encode", name = field.name, "field not transmitted");
            continue;
        }

        let value = (field.read)(record);
        if field.omit_if_default && value.is_default() {
            debug!(target: "multisend::encode", name = field.name, "omitting default field");
            continue;
        }

        let text = value.render();
        trace!(target: "multisend::encode", name = field.name, value = %text, "encoded field");
        params.insert(field.name, text);
    }

    params
}
