//! The formula catalogue and its evaluation entry points.
//!
//! # Example
//!
//! ```
//! use navcard_core::{Catalogue, InputStore, keys};
//!
//! let catalogue = Catalogue::standard();
//! let mut store = InputStore::with_defaults(&catalogue);
//! store.set(keys::ALTITUDE_FT, "1000");
//! store.set(keys::DISTANCE_NM, "2,000");
//!
//! let evaluation = catalogue.evaluate("gradient", &store).unwrap();
//! assert_eq!(evaluation.outputs.get(keys::GRADIENT_FT_PER_NM), Some(0.5));
//! ```

pub mod keys;
mod table;

use thiserror::Error;
use tracing::trace;

use crate::models::{FormulaDefinition, Outputs};
use crate::store::InputStore;

/// Errors returned by catalogue lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// No formula carries the requested identifier.
    #[error("unknown formula '{0}'")]
    UnknownFormula(String),
}

/// The outputs of one formula for one store snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub formula: &'static FormulaDefinition,
    pub outputs: Outputs,
}

impl Evaluation {
    /// Evaluates `formula` against `store`.
    pub fn of(
        formula: &'static FormulaDefinition,
        store: &InputStore,
    ) -> Self {
        trace!(formula = formula.id, "evaluating formula");
        Self {
            formula,
            outputs: formula.compute(store),
        }
    }
}

/// An ordered, immutable sequence of formula definitions.
#[derive(Debug, Clone, Copy)]
pub struct Catalogue {
    formulas: &'static [FormulaDefinition],
}

impl Catalogue {
    /// Wraps a static formula table.
    pub const fn new(formulas: &'static [FormulaDefinition]) -> Self {
        Self { formulas }
    }

    /// The fourteen standard navigation formulas.
    pub fn standard() -> Self {
        Self::new(&table::STANDARD)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FormulaDefinition> {
        self.formulas.iter()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Looks up a formula by identifier.
    pub fn find(
        &self,
        id: &str,
    ) -> Option<&'static FormulaDefinition> {
        self.formulas.iter().find(|formula| formula.id == id)
    }

    /// Evaluates one formula against the store.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownFormula`] if `id` is not in the
    /// catalogue. Input text never causes an error.
    pub fn evaluate(
        &self,
        id: &str,
        store: &InputStore,
    ) -> Result<Evaluation, CatalogueError> {
        let formula = self
            .find(id)
            .ok_or_else(|| CatalogueError::UnknownFormula(id.to_string()))?;
        Ok(Evaluation::of(formula, store))
    }

    /// Evaluates every formula against the same store, in catalogue order.
    pub fn evaluate_all(
        &self,
        store: &InputStore,
    ) -> Vec<Evaluation> {
        self.iter()
            .map(|formula| Evaluation::of(formula, store))
            .collect()
    }

    /// Formulas that read `key`, in catalogue order.
    pub fn readers_of<'k>(
        &self,
        key: &'k str,
    ) -> impl Iterator<Item = &'static FormulaDefinition> + 'k {
        self.formulas.iter().filter(move |formula| formula.reads(key))
    }

    /// Every declared input key, once, in first-declaration order.
    pub fn input_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        for field in self.formulas.iter().flat_map(|formula| formula.inputs) {
            if !keys.contains(&field.key) {
                keys.push(field.key);
            }
        }
        keys
    }

    /// Returns `true` if any formula declares `key` as an input.
    pub fn declares_input(
        &self,
        key: &str,
    ) -> bool {
        self.formulas.iter().any(|formula| formula.reads(key))
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::standard()
    }
}
