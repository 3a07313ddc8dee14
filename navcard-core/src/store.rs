//! The input value store shared by every formula card.
//!
//! The store maps input keys to the raw text a user typed. It is owned by
//! whatever presents the cards; formulas only read from it. Keys are not
//! namespaced per formula, so two formulas that declare the same key (for
//! example `rNM`) see the same value.

use std::collections::BTreeMap;

use crate::catalogue::Catalogue;
use crate::numeric::{parse_number, parse_optional, parse_or_zero};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputStore {
    values: BTreeMap<String, String>,
}

impl InputStore {
    /// Creates an empty store. Every lookup falls back until values are set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the initial text of every input the catalogue
    /// declares: its default, or the empty string.
    ///
    /// When several formulas declare the same key, the first declaration
    /// decides the initial text.
    pub fn with_defaults(catalogue: &Catalogue) -> Self {
        let mut store = Self::new();
        for formula in catalogue.iter() {
            for field in formula.inputs {
                store
                    .values
                    .entry(field.key.to_string())
                    .or_insert_with(|| field.initial_text().to_string());
            }
        }
        store
    }

    /// Full reset: drops every value, then reinstates the catalogue's
    /// initial text.
    pub fn clear(
        &mut self,
        catalogue: &Catalogue,
    ) {
        *self = Self::with_defaults(catalogue);
    }

    /// Stores raw text for `key`, returning the previous text.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn remove(
        &mut self,
        key: &str,
    ) -> Option<String> {
        self.values.remove(key)
    }

    /// Reads `key` as a number, falling back to zero.
    pub fn number(
        &self,
        key: &str,
    ) -> f64 {
        parse_or_zero(self.get(key))
    }

    /// Reads `key` as a number with an explicit fallback.
    pub fn number_or(
        &self,
        key: &str,
        fallback: f64,
    ) -> f64 {
        parse_number(self.get(key), fallback)
    }

    /// Reads `key` as a number, or `None` when absent or not numeric.
    pub fn optional_number(
        &self,
        key: &str,
    ) -> Option<f64> {
        parse_optional(self.get(key))
    }

    /// Returns `true` when `key` holds non-empty text.
    pub fn is_filled(
        &self,
        key: &str,
    ) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }

    /// Iterates over `(key, raw text)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for InputStore {
    fn extend<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
