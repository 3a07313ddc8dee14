//! Settings for the `navcard` binary.
//!
//! Settings come from a TOML file (`navcard.toml` in the working directory
//! unless `--config` names another), then command-line flags override
//! individual values. Every key is optional:
//!
//! ```toml
//! log_level = "debug"
//! log_file = "navcard.log"
//! log_console = false
//!
//! [display]
//! decimals = 2
//! placeholder = "n/a"
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use navcard_core::DisplayOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "navcard.toml";

/// Upper bound on `display.decimals`.
pub const MAX_DECIMALS: usize = 12;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("display.decimals must be at most {max}, got {0}", max = MAX_DECIMALS)]
    DecimalsOutOfRange(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// EnvFilter directive. `None` keeps `RUST_LOG` or the built-in default.
    pub log_level: Option<String>,

    /// Log file to append to, in addition to the console.
    pub log_file: Option<PathBuf>,

    /// Whether log records are written to stderr.
    pub log_console: bool,

    pub display: DisplayOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: None,
            log_file: None,
            log_console: true,
            display: DisplayOptions::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub decimals: Option<usize>,
}

impl Settings {
    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when no
    /// path is given.
    ///
    /// An explicit path must exist. The default file is optional; when it is
    /// absent the built-in defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            debug!(path = %path.display(), "no settings file; using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings file");
        Self::from_toml_str(&text)
    }

    /// Applies command-line values over the file values and re-validates.
    pub fn with_overrides(
        mut self,
        overrides: SettingsOverrides,
    ) -> Result<Self, SettingsError> {
        if let Some(level) = overrides.log_level {
            self.log_level = Some(level);
        }
        if let Some(file) = overrides.log_file {
            self.log_file = Some(file);
        }
        if let Some(decimals) = overrides.decimals {
            self.display.decimals = decimals;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.display.decimals > MAX_DECIMALS {
            return Err(SettingsError::DecimalsOutOfRange(self.display.decimals));
        }
        Ok(())
    }
}

impl fmt::Display for Settings {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let log_file = self
            .log_file
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "(none)".to_string());

        writeln!(f, "Log level:     {}", self.log_level.as_deref().unwrap_or("(default)"))?;
        writeln!(f, "Log file:      {log_file}")?;
        writeln!(f, "Log console:   {}", self.log_console)?;
        writeln!(f, "Decimals:      {}", self.display.decimals)?;
        write!(f, "Placeholder:   {}", self.display.placeholder)
    }
}
