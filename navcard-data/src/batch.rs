//! Batch evaluation of loaded scenarios and CSV output of the results.
//!
//! Output has one line per computed value:
//!
//! ```csv
//! row,formula,key,value
//! 1,gradient,gradientFtPerNM,0.500
//! ```
//!
//! Values go through [`DisplayOptions`], so null outputs appear as the
//! placeholder rather than an empty cell.

use std::io::Write;

use navcard_core::{Catalogue, CatalogueError, DisplayOptions, Outputs};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::loader::Scenario;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("CSV write error: {0}")]
    Write(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The outputs computed for one scenario row.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub row: usize,
    pub formula: &'static str,
    pub outputs: Outputs,
}

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    row: usize,
    formula: &'a str,
    key: &'a str,
    value: String,
}

/// Evaluates every scenario against a fresh store of its own.
///
/// # Errors
///
/// Returns [`BatchError::Catalogue`] if a scenario names a formula the
/// catalogue lacks. Scenarios from [`crate::ScenarioLoader`] are already
/// checked against the catalogue they were loaded with.
pub fn evaluate_scenarios(
    scenarios: &[Scenario],
    catalogue: &Catalogue,
) -> Result<Vec<BatchResult>, BatchError> {
    let mut results = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        let store = scenario.store(catalogue);
        let evaluation = catalogue.evaluate(&scenario.formula_id, &store)?;
        debug!(row = scenario.row, formula = evaluation.formula.id, "evaluated scenario");

        results.push(BatchResult {
            row: scenario.row,
            formula: evaluation.formula.id,
            outputs: evaluation.outputs,
        });
    }

    info!(count = results.len(), "batch evaluation complete");
    Ok(results)
}

/// Writes results as `row,formula,key,value` CSV.
pub fn write_results<W: Write>(
    writer: W,
    results: &[BatchResult],
    options: &DisplayOptions,
) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if results.is_empty() {
        csv_writer.write_record(["row", "formula", "key", "value"])?;
    }

    for result in results {
        for output in &result.outputs {
            csv_writer.serialize(ResultRow {
                row: result.row,
                formula: result.formula,
                key: output.key,
                value: options.format(output.value),
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
