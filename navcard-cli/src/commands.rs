//! Output for the one-shot subcommands. Everything writes to a caller
//! supplied writer so the binary can pass stdout and tests a buffer.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use navcard_core::{Catalogue, DisplayOptions, FormulaCard, InputStore};
use navcard_data::{ScenarioLoader, evaluate_scenarios, write_results};
use tracing::{info, warn};

use crate::pairs::parse_pair;

/// One line per formula: identifier, title, then the equation indented.
pub fn list(
    out: &mut impl Write,
    catalogue: &Catalogue,
) -> Result<()> {
    let width = catalogue.iter().map(|f| f.id.len()).max().unwrap_or(0);

    for formula in catalogue.iter() {
        writeln!(out, "{:<width$}  {}", formula.id, formula.title)?;
        if let Some(equation) = formula.equation {
            writeln!(out, "{:<width$}  {equation}", "")?;
        }
    }
    Ok(())
}

/// Describes a formula's fields: key, label, default and the optional flag.
pub fn show(
    out: &mut impl Write,
    catalogue: &Catalogue,
    id: &str,
) -> Result<()> {
    let formula = catalogue
        .find(id)
        .with_context(|| format!("unknown formula '{id}' (try `navcard list`)"))?;

    writeln!(out, "{} [{}]", formula.title, formula.id)?;
    if let Some(equation) = formula.equation {
        writeln!(out, "  {equation}")?;
    }

    let width = formula
        .inputs
        .iter()
        .map(|f| f.key.len())
        .chain(formula.outputs.iter().map(|f| f.key.len()))
        .max()
        .unwrap_or(0);

    writeln!(out, "inputs:")?;
    for field in formula.inputs {
        write!(out, "  {:<width$}  {}", field.key, field.label)?;
        if let Some(default) = field.default {
            write!(out, " [default {default}]")?;
        }
        if field.optional {
            write!(out, " (optional)")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "outputs:")?;
    for field in formula.outputs {
        writeln!(out, "  {:<width$}  {}", field.key, field.label)?;
    }
    Ok(())
}

/// Splits `eval` arguments into the formula id and `key=value` pairs.
///
/// Without `--all` the first argument is the formula id. With it, every
/// argument is a pair.
pub fn split_eval_args(
    all: bool,
    args: Vec<String>,
) -> Result<(Option<String>, Vec<(String, String)>)> {
    let mut args = args.into_iter();
    let id = if all {
        None
    } else {
        Some(args.next().context("missing formula id (or pass --all)")?)
    };

    let pairs = args
        .map(|arg| parse_pair(&arg))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((id, pairs))
}

/// Builds a store from the catalogue defaults plus `pairs`.
///
/// Keys no formula reads are kept but logged, since they can only be typos.
pub fn store_from_pairs(
    catalogue: &Catalogue,
    pairs: &[(String, String)],
) -> InputStore {
    let mut store = InputStore::with_defaults(catalogue);
    for (key, value) in pairs {
        if !catalogue.declares_input(key) {
            warn!(key = %key, "no formula reads this key");
        }
        store.set(key.as_str(), value.as_str());
    }
    store
}

/// Evaluates one formula, or every formula when `id` is `None`, and prints
/// the cards separated by blank lines.
pub fn eval(
    out: &mut impl Write,
    catalogue: &Catalogue,
    id: Option<&str>,
    pairs: &[(String, String)],
    options: &DisplayOptions,
) -> Result<()> {
    let store = store_from_pairs(catalogue, pairs);

    let evaluations = match id {
        Some(id) => vec![catalogue.evaluate(id, &store)?],
        None => catalogue.evaluate_all(&store),
    };

    for (idx, evaluation) in evaluations.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        let card = FormulaCard::new(evaluation.formula, &store, &evaluation.outputs, options);
        write!(out, "{card}")?;
    }
    Ok(())
}

/// Runs a scenario file and writes `row,formula,key,value` CSV.
pub fn batch(
    out: &mut impl Write,
    catalogue: &Catalogue,
    path: &Path,
    options: &DisplayOptions,
) -> Result<()> {
    let scenarios = ScenarioLoader::load_from_file(path, catalogue)
        .with_context(|| format!("Failed to load scenarios: {}", path.display()))?;
    info!(count = scenarios.len(), path = %path.display(), "loaded scenarios");

    let results = evaluate_scenarios(&scenarios, catalogue)?;
    write_results(out, &results, options).context("Failed to write batch results")?;
    Ok(())
}
