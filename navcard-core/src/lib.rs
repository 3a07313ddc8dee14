pub mod calculations;
pub mod catalogue;
pub mod display;
pub mod models;
pub mod numeric;
pub mod store;

pub use catalogue::{Catalogue, CatalogueError, Evaluation, keys};
pub use display::{DisplayOptions, FormulaCard, format_value};
pub use models::*;
pub use store::InputStore;
