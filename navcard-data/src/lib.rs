pub mod batch;
pub mod loader;

pub use batch::{BatchError, BatchResult, evaluate_scenarios, write_results};
pub use loader::{FORMULA_COLUMN, Scenario, ScenarioLoadError, ScenarioLoader};
