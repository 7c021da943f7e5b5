//! Ordered query-parameter mapping shared by every request builder.

use std::fmt::Display;

/// An ordered mapping of query-string keys to values.
///
/// Keys keep the position of their first insertion; setting an existing key
/// replaces its value in place. Absent optional values are never stored, so an
/// omitted parameter never reaches the wire as an empty `key=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any existing value for that key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Sets `key` only when `value` is present.
    pub fn set_opt<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.set(key, v);
        }
        self
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(idx).1)
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Merges `other` into `self`; values from `other` win on key collision.
    pub fn merge(&mut self, other: QueryParams) -> &mut Self {
        for (k, v) in other.pairs {
            self.set(k, v);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Builds the common `fields` selector mapping used by most single-resource endpoints.
    pub(crate) fn with_fields(fields: Option<&str>) -> Self {
        let mut qp = Self::new();
        qp.set_opt("fields", fields);
        qp
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut qp = Self::new();
        for (k, v) in iter {
            qp.set(k, v);
        }
        qp
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Display,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}
