//! Filter sets and query-string construction for list requests.
//!
//! A [`FilterSet`] is an insertion-ordered mapping of filter names to scalar
//! values. Re-inserting a key replaces its value in place, so the key keeps
//! its original position and the last value wins.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{filter_query_string, FilterSet};
//!
//! let filters = FilterSet::new().with("limit", 10).with("is_visible", true);
//! assert_eq!(filter_query_string(Some(&filters)), "?limit=10&is_visible=true");
//! assert_eq!(filter_query_string(None), "");
//! assert_eq!(filter_query_string(Some(&FilterSet::new())), "?");
//! ```

use std::fmt::Display;

/// An insertion-ordered set of list filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(String, String)>,
}

impl FilterSet {
    /// Creates an empty filter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a filter, replacing any existing value for the key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value of a filter, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes a filter, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no filters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders `k1=v1&k2=v2` with percent-encoded keys and values.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for FilterSet
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (key, value) in iter {
            filters.insert(key, value);
        }
        filters
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FilterSet
where
    K: Into<String>,
    V: Display,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Builds the query-string suffix for a list request.
///
/// `None` yields an empty string. A present set yields `?` followed by its
/// pairs, so an empty set yields a bare `"?"`.
#[must_use]
pub fn filter_query_string(filters: Option<&FilterSet>) -> String {
    filters.map_or_else(String::new, |filters| format!("?{}", filters.to_query()))
}
