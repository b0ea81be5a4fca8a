/*
[INPUT]:  Typed request fields converted to strings
[OUTPUT]: Key-ordered parameter map and its form-urlencoded query string
[POS]:    HTTP layer - canonical parameter encoding for signing
[UPDATE]: When changing omission rules or query encoding
*/

use std::collections::BTreeMap;
use std::fmt::Display;

use url::form_urlencoded;

/// Query parameters ordered by key.
///
/// The encoded form is what gets signed, so iteration order must be
/// deterministic; a `BTreeMap` keeps keys in byte-lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: BTreeMap<String, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Insert `value` only when it was provided
    pub fn insert_opt<T: Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.insert(key, value.to_string());
        }
    }

    /// Insert a string only when it was provided and is not blank
    pub fn insert_opt_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.insert(key, value);
        }
    }

    /// Insert a boolean flag only when it is set
    pub fn insert_flag(&mut self, key: &str, value: bool) {
        if value {
            self.insert(key, "true");
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded` with keys in order.
    ///
    /// Space becomes `+`; `/`, `+` and other reserved bytes are percent-encoded.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
