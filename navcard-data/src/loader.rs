//! CSV loader for formula scenarios.
//!
//! ## CSV Format
//!
//! A header row is required. One column, `formula`, names the formula to
//! evaluate on that row; every other column is an input key from the
//! catalogue (`altFt`, `distNM`, `tasKt`, ...). Column order does **not**
//! matter and header names are case-sensitive.
//!
//! Cells hold raw field text exactly as a user would type it, so
//! comma-grouped numbers must be quoted. An empty cell leaves the field at
//! its default. Columns that no formula reads are ignored with a warning.
//!
//! ### Example
//!
//! ```csv
//! formula,altFt,distNM,tasKt,bankDeg
//! gradient,1000,"2,000",,
//! turnRadius,,,150,25
//! ```

use std::io::Read;
use std::path::Path;

use navcard_core::{Catalogue, InputStore};
use thiserror::Error;
use tracing::{debug, warn};

/// Name of the column holding the formula identifier.
pub const FORMULA_COLUMN: &str = "formula";

/// Errors that can occur while loading scenario data.
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    /// The underlying CSV reader failed (bad structure, ragged rows, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The file could not be read.
    #[error("cannot read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// The header row has no `formula` column.
    #[error("missing required '{column}' column", column = FORMULA_COLUMN)]
    MissingFormulaColumn,

    /// A row names a formula the catalogue does not contain.
    /// `row` is 1-based, not counting the header.
    #[error("unknown formula '{formula}' on row {row}")]
    UnknownFormula { formula: String, row: usize },
}

/// One row of a scenario file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// 1-based row number, not counting the header.
    pub row: usize,
    pub formula_id: String,

    /// Non-empty `(input key, raw text)` cells, in column order.
    pub inputs: Vec<(String, String)>,
}

impl Scenario {
    /// Builds the store this scenario describes: catalogue defaults, then the
    /// row's cells on top.
    pub fn store(
        &self,
        catalogue: &Catalogue,
    ) -> InputStore {
        let mut store = InputStore::with_defaults(catalogue);
        store.extend(self.inputs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        store
    }
}

/// Loader for scenario CSV files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parses scenarios from any reader. Rows are returned in file order.
    ///
    /// # Errors
    ///
    /// * [`ScenarioLoadError::Parse`] if the CSV is structurally invalid.
    /// * [`ScenarioLoadError::MissingFormulaColumn`] if there is no
    ///   `formula` header.
    /// * [`ScenarioLoadError::UnknownFormula`] if a row names a formula the
    ///   catalogue lacks.
    pub fn parse<R: Read>(
        reader: R,
        catalogue: &Catalogue,
    ) -> Result<Vec<Scenario>, ScenarioLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All) // tolerate whitespace around values
            .flexible(false) // strict column count
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let formula_index = headers
            .iter()
            .position(|h| h == FORMULA_COLUMN)
            .ok_or(ScenarioLoadError::MissingFormulaColumn)?;

        for (idx, header) in headers.iter().enumerate() {
            if idx != formula_index && !catalogue.declares_input(header) {
                warn!(column = header, "column is not an input of any formula; ignored");
            }
        }

        let mut scenarios = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = idx + 1; // 1-based for user-facing messages

            let formula_id = record.get(formula_index).unwrap_or_default().to_string();
            if catalogue.find(&formula_id).is_none() {
                return Err(ScenarioLoadError::UnknownFormula {
                    formula: formula_id,
                    row,
                });
            }

            let inputs = headers
                .iter()
                .zip(record.iter())
                .enumerate()
                .filter(|(i, (header, value))| {
                    *i != formula_index && !value.is_empty() && catalogue.declares_input(header)
                })
                .map(|(_, (header, value))| (header.to_string(), value.to_string()))
                .collect();

            scenarios.push(Scenario {
                row,
                formula_id,
                inputs,
            });
        }

        debug!(count = scenarios.len(), "parsed scenarios");
        Ok(scenarios)
    }

    /// Parses scenarios from CSV text.
    pub fn load_from_str(
        input: &str,
        catalogue: &Catalogue,
    ) -> Result<Vec<Scenario>, ScenarioLoadError> {
        Self::parse(input.as_bytes(), catalogue)
    }

    /// Reads a file from disk and delegates to [`ScenarioLoader::parse`].
    pub fn load_from_file(
        path: &Path,
        catalogue: &Catalogue,
    ) -> Result<Vec<Scenario>, ScenarioLoadError> {
        let file = std::fs::File::open(path)?;
        Self::parse(file, catalogue)
    }
}

#[cfg(test)]
mod tests {
    use navcard_core::keys;
    use pretty_assertions::assert_eq;

    use super::*;

    const MIXED_CSV: &str = "\
formula,altFt,distNM,tasKt,bankDeg
gradient,1000,\"2,000\",,
turnRadius,,,150,25
";

    fn catalogue() -> Catalogue {
        Catalogue::standard()
    }

    #[test]
    fn test_parses_rows_in_file_order() {
        let scenarios = ScenarioLoader::load_from_str(MIXED_CSV, &catalogue()).expect("should parse");

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].row, 1);
        assert_eq!(scenarios[0].formula_id, "gradient");
        assert_eq!(scenarios[1].row, 2);
        assert_eq!(scenarios[1].formula_id, "turnRadius");
    }

    #[test]
    fn test_empty_cells_are_skipped() {
        let scenarios = ScenarioLoader::load_from_str(MIXED_CSV, &catalogue()).unwrap();

        assert_eq!(
            scenarios[0].inputs,
            vec![
                ("altFt".to_string(), "1000".to_string()),
                ("distNM".to_string(), "2,000".to_string()),
            ]
        );
        assert_eq!(
            scenarios[1].inputs,
            vec![
                ("tasKt".to_string(), "150".to_string()),
                ("bankDeg".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_formula_column_may_be_anywhere() {
        let csv = "rNM,formula\n1,loss90\n";

        let scenarios = ScenarioLoader::load_from_str(csv, &catalogue()).unwrap();

        assert_eq!(scenarios[0].formula_id, "loss90");
        assert_eq!(scenarios[0].inputs, vec![("rNM".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let csv = "formula , gsKt\n timeOut , 120 \n";

        let scenarios = ScenarioLoader::load_from_str(csv, &catalogue()).unwrap();

        assert_eq!(scenarios[0].formula_id, "timeOut");
        assert_eq!(scenarios[0].inputs, vec![("gsKt".to_string(), "120".to_string())]);
    }

    #[test]
    fn test_unknown_columns_are_ignored() {
        let csv = "formula,rNM,remarks\nloss90,2,checkride\n";

        let scenarios = ScenarioLoader::load_from_str(csv, &catalogue()).unwrap();

        assert_eq!(scenarios[0].inputs, vec![("rNM".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_missing_formula_column_is_error() {
        let csv = "altFt,distNM\n1000,2000\n";

        let err = ScenarioLoader::load_from_str(csv, &catalogue()).unwrap_err();

        assert!(matches!(err, ScenarioLoadError::MissingFormulaColumn));
    }

    #[test]
    fn test_unknown_formula_reports_row() {
        let csv = "formula,rNM\nloss90,1\nholdingEntry,2\n";

        let err = ScenarioLoader::load_from_str(csv, &catalogue()).unwrap_err();

        match err {
            ScenarioLoadError::UnknownFormula { formula, row } => {
                assert_eq!(formula, "holdingEntry");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let csv = "formula,rNM\nloss90,1,extra\n";

        let err = ScenarioLoader::load_from_str(csv, &catalogue()).unwrap_err();

        assert!(matches!(err, ScenarioLoadError::Parse(_)));
    }

    #[test]
    fn test_header_only_yields_no_scenarios() {
        let scenarios = ScenarioLoader::load_from_str("formula,rNM\n", &catalogue()).unwrap();

        assert!(scenarios.is_empty());
    }

    #[test]
    fn test_store_layers_cells_over_defaults() {
        let scenarios = ScenarioLoader::load_from_str(MIXED_CSV, &catalogue()).unwrap();

        let first = scenarios[0].store(&catalogue());
        assert_eq!(first.get(keys::DISTANCE_NM), Some("2,000"));
        assert_eq!(first.get(keys::BANK_DEG), Some("30"));

        let second = scenarios[1].store(&catalogue());
        assert_eq!(second.get(keys::BANK_DEG), Some("25"));
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let err = ScenarioLoader::load_from_file(Path::new("does/not/exist.csv"), &catalogue())
            .unwrap_err();

        assert!(matches!(err, ScenarioLoadError::Io(_)));
    }
}
