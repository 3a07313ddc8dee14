//! Text rendering of computed values and whole formula cards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{FormulaDefinition, Outputs};
use crate::store::InputStore;

/// Shown in place of a null or non-finite value.
pub const PLACEHOLDER: &str = "—";

pub const DEFAULT_DECIMALS: usize = 3;

/// How numbers are turned into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Fixed number of digits after the decimal point.
    pub decimals: usize,

    /// Text for values that cannot be shown.
    pub placeholder: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            placeholder: PLACEHOLDER.to_string(),
        }
    }
}

impl DisplayOptions {
    /// Formats a computed value, using the placeholder for `None`, `NaN`
    /// and infinities. Negative zero prints as zero.
    pub fn format(
        &self,
        value: Option<f64>,
    ) -> String {
        match value {
            Some(v) if v.is_finite() => {
                let v = if v == 0.0 { 0.0 } else { v };
                format!("{v:.prec$}", prec = self.decimals)
            }
            _ => self.placeholder.clone(),
        }
    }
}

/// Formats a value with three decimals, or "—" when it cannot be shown.
///
/// # Examples
///
/// ```
/// use navcard_core::format_value;
///
/// assert_eq!(format_value(Some(0.5)), "0.500");
/// assert_eq!(format_value(None), "—");
/// assert_eq!(format_value(Some(f64::INFINITY)), "—");
/// ```
pub fn format_value(value: Option<f64>) -> String {
    DisplayOptions::default().format(value)
}

/// Renders one formula card: title, equation, inputs with their raw text and
/// outputs with their formatted values.
pub struct FormulaCard<'a> {
    pub formula: &'a FormulaDefinition,
    pub store: &'a InputStore,
    pub outputs: &'a Outputs,
    pub options: &'a DisplayOptions,
}

impl<'a> FormulaCard<'a> {
    pub fn new(
        formula: &'a FormulaDefinition,
        store: &'a InputStore,
        outputs: &'a Outputs,
        options: &'a DisplayOptions,
    ) -> Self {
        Self {
            formula,
            store,
            outputs,
            options,
        }
    }

    fn label_width(&self) -> usize {
        self.formula
            .inputs
            .iter()
            .map(|field| field.label.chars().count())
            .chain(
                self.formula
                    .outputs
                    .iter()
                    .map(|field| field.label.chars().count()),
            )
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for FormulaCard<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let width = self.label_width();

        writeln!(f, "{} [{}]", self.formula.title, self.formula.id)?;
        if let Some(equation) = self.formula.equation {
            writeln!(f, "  {equation}")?;
        }

        for field in self.formula.inputs {
            let raw = self.store.get(field.key).unwrap_or("");
            let marker = if field.optional { " (optional)" } else { "" };
            writeln!(f, "  > {:<width$}  {raw}{marker}", field.label)?;
        }

        for field in self.formula.outputs {
            let value = self.options.format(self.outputs.get(field.key));
            writeln!(f, "  = {:<width$}  {value}", field.label)?;
        }

        Ok(())
    }
}
