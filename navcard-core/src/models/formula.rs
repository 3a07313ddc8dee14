use std::fmt;

use super::{InputField, OutputField, Outputs};
use crate::store::InputStore;

/// Signature of a formula's compute function.
///
/// Implementations read their inputs from the store through
/// [`crate::numeric`] and must not panic for any stored text.
pub type ComputeFn = fn(&InputStore) -> Outputs;

/// One immutable entry of the formula catalogue.
#[derive(Clone, Copy)]
pub struct FormulaDefinition {
    /// Unique identifier, e.g. `"turnRadius"`.
    pub id: &'static str,
    pub title: &'static str,
    pub inputs: &'static [InputField],
    pub outputs: &'static [OutputField],
    pub compute: ComputeFn,

    /// Human-readable equation shown on the card.
    pub equation: Option<&'static str>,
}

impl FormulaDefinition {
    /// Runs this formula against the current store contents.
    pub fn compute(
        &self,
        store: &InputStore,
    ) -> Outputs {
        (self.compute)(store)
    }

    /// Returns `true` if this formula reads `key`.
    pub fn reads(
        &self,
        key: &str,
    ) -> bool {
        self.inputs.iter().any(|field| field.key == key)
    }

    /// Looks up an input field by key.
    pub fn input(
        &self,
        key: &str,
    ) -> Option<&'static InputField> {
        self.inputs.iter().find(|field| field.key == key)
    }

    /// Looks up an output field by key.
    pub fn output(
        &self,
        key: &str,
    ) -> Option<&'static OutputField> {
        self.outputs.iter().find(|field| field.key == key)
    }
}

impl fmt::Debug for FormulaDefinition {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("FormulaDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("equation", &self.equation)
            .finish_non_exhaustive()
    }
}

impl PartialEq for FormulaDefinition {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.id == other.id
    }
}
