pub mod commands;
pub mod logging;
pub mod pairs;
pub mod session;
pub mod settings;
