mod field;
mod formula;
mod outputs;

pub use field::{InputField, OutputField};
pub use formula::{ComputeFn, FormulaDefinition};
pub use outputs::{OutputValue, Outputs};
