//! Logging for the `navcard` binary.
//!
//! One global filter feeds two sinks: the console on stderr, which keeps
//! stdout free for command output, and an optional append-only log file.
//! Console lines are short; file lines carry a local timestamp.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::settings::Settings;

/// Filter used when neither settings nor `RUST_LOG` give one.
pub const DEFAULT_FILTER: &str = "warn";

const RESET: &str = "\x1b[0m";

/// `[timestamp] LEVEL target: message fields`
#[derive(Debug, Clone, Copy)]
pub(crate) struct CardFmt {
    timestamp: bool,
}

impl CardFmt {
    pub(crate) fn console() -> Self {
        Self { timestamp: false }
    }

    pub(crate) fn file() -> Self {
        Self { timestamp: true }
    }
}

fn level_style(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

impl<S, N> FormatEvent<S, N> for CardFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level = meta.level();

        if self.timestamp {
            write!(writer, "{} ", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))?;
        }

        if writer.has_ansi_escapes() {
            write!(writer, "{}{level:>5}{RESET} ", level_style(level))?;
        } else {
            write!(writer, "{level:>5} ")?;
        }
        write!(writer, "{}: ", meta.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// The global filter: the settings level if given, else `RUST_LOG`, else
/// [`DEFAULT_FILTER`].
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Opens `path` for appending. The directory must already exist.
pub fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Installs the global subscriber described by `settings`. Call once, after
/// settings are loaded.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let filter = build_filter(settings.log_level.as_deref())?;

    let console_layer = settings.log_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_ansi(io::stderr().is_terminal())
            .event_format(CardFmt::console())
            .with_writer(io::stderr)
    });

    let file_layer = match settings.log_file.as_deref() {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .event_format(CardFmt::file())
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")?;

    info!(
        level = settings.log_level.as_deref().unwrap_or("(env)"),
        console = settings.log_console,
        file = ?settings.log_file,
        "logging configured"
    );
    Ok(())
}
