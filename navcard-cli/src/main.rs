use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use navcard_cli::commands;
use navcard_cli::logging;
use navcard_cli::session::Session;
use navcard_cli::settings::{Settings, SettingsOverrides};
use navcard_core::Catalogue;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Aviation navigation formula reference card.
///
/// Evaluates the standard catalogue of climb, airspeed, turn, DME arc and
/// timing formulas from raw field text.
#[derive(Debug, Parser)]
#[command(name = "navcard", version, about)]
struct Cli {
    /// Settings file. Defaults to `navcard.toml` when it exists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `navcard_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Digits after the decimal point in printed values.
    #[arg(long, global = true)]
    decimals: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every formula with its equation.
    List,

    /// Describe a formula's input and output fields.
    Show {
        /// Formula identifier, e.g. `turnRadius`.
        id: String,
    },

    /// Evaluate a formula from key=value inputs.
    Eval {
        /// Formula identifier followed by field values, e.g.
        /// `gradient altFt=1000 distNM=2,000`. With `--all`, field values only.
        #[arg(value_name = "ID | KEY=VALUE")]
        args: Vec<String>,

        /// Evaluate every formula against the same inputs.
        #[arg(long)]
        all: bool,
    },

    /// Evaluate a scenario CSV file and print results as CSV.
    Batch {
        /// CSV with a `formula` column plus input-key columns.
        file: PathBuf,
    },

    /// Interactive card: set fields and watch dependent formulas recompute.
    Session,
}

impl Cli {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            decimals: self.decimals,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())
        .context("Failed to load settings")?
        .with_overrides(cli.overrides())
        .context("Invalid settings")?;
    logging::init_logging(&settings).context("Failed to configure logging")?;
    debug!("effective settings:\n{settings}");

    let catalogue = Catalogue::standard();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List => commands::list(&mut out, &catalogue)?,
        Command::Show { id } => commands::show(&mut out, &catalogue, &id)?,
        Command::Eval { args, all } => {
            let (id, inputs) = commands::split_eval_args(all, args)?;
            commands::eval(&mut out, &catalogue, id.as_deref(), &inputs, &settings.display)?
        }
        Command::Batch { file } => commands::batch(&mut out, &catalogue, &file, &settings.display)?,
        Command::Session => {
            let mut session = Session::new(catalogue, settings.display.clone());
            session.run(io::stdin().lock(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
