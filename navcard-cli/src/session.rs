//! Interactive card session.
//!
//! The session owns one [`InputStore`] for its whole lifetime. Every change
//! to a field recomputes and prints each formula that reads it, the way a
//! card screen recomputes on every keystroke. Bad commands are reported and
//! the session carries on; only I/O failures end it early.

use std::io::{BufRead, Write};

use anyhow::Result;
use navcard_core::{Catalogue, DisplayOptions, FormulaCard, FormulaDefinition, InputStore};
use thiserror::Error;
use tracing::debug;

use crate::commands;
use crate::pairs::{PairParseError, parse_pair};

const PROMPT: &str = "> ";

const HELP: &str = "\
commands:
  set <key> <value>   set a field (also: set key=value, or just key=value)
  unset <key>         remove a field's text
  clear               reset every field to its default
  show [id]           print one card, or all of them
  list                list formulas
  help                this text
  quit                leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set { key: String, value: String },
    Unset(String),
    Clear,
    Show(Option<String>),
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Pair(#[from] PairParseError),
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "set" => Self::parse_set(rest)?,
            "unset" if !rest.is_empty() => Self::Unset(rest.to_string()),
            "unset" => return Err(CommandError::Usage("unset <key>")),
            "clear" => Self::Clear,
            "show" => Self::Show((!rest.is_empty()).then(|| rest.to_string())),
            "list" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ if line.contains('=') => {
                let (key, value) = parse_pair(line)?;
                Self::Set { key, value }
            }
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }

    fn parse_set(rest: &str) -> Result<Self, CommandError> {
        let (first, value) = match rest.split_once(char::is_whitespace) {
            Some((first, value)) => (first, value.trim()),
            None => (rest, ""),
        };

        if first.is_empty() {
            return Err(CommandError::Usage("set <key> <value>"));
        }
        if first.contains('=') {
            let (key, value) = parse_pair(rest)?;
            return Ok(Self::Set { key, value });
        }

        Ok(Self::Set {
            key: first.to_string(),
            value: value.to_string(),
        })
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    catalogue: Catalogue,
    store: InputStore,
    options: DisplayOptions,
}

impl Session {
    /// Starts with every field at its default.
    pub fn new(
        catalogue: Catalogue,
        options: DisplayOptions,
    ) -> Self {
        Self {
            store: InputStore::with_defaults(&catalogue),
            catalogue,
            options,
        }
    }

    pub fn store(&self) -> &InputStore {
        &self.store
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "navcard session; type `help` for commands")?;

        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };

            debug!(?command, "session command");
            if self.execute(command, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn execute<W: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut W,
    ) -> Result<Flow> {
        match command {
            SessionCommand::Set { key, value } => {
                self.store.set(key.as_str(), value);
                self.print_readers(&key, out)?;
            }
            SessionCommand::Unset(key) => {
                self.store.remove(&key);
                self.print_readers(&key, out)?;
            }
            SessionCommand::Clear => {
                self.store.clear(&self.catalogue);
                writeln!(out, "all fields reset")?;
            }
            SessionCommand::Show(Some(id)) => match self.catalogue.find(&id) {
                Some(formula) => self.print_card(formula, out)?,
                None => writeln!(out, "error: unknown formula '{id}'")?,
            },
            SessionCommand::Show(None) => {
                for (idx, formula) in self.catalogue.iter().enumerate() {
                    if idx > 0 {
                        writeln!(out)?;
                    }
                    self.print_card(formula, out)?;
                }
            }
            SessionCommand::List => commands::list(out, &self.catalogue)?,
            SessionCommand::Help => write!(out, "{HELP}")?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Prints every card that reads `key`, or a note when none does.
    fn print_readers<W: Write>(
        &self,
        key: &str,
        out: &mut W,
    ) -> Result<()> {
        let readers: Vec<_> = self.catalogue.readers_of(key).collect();
        if readers.is_empty() {
            writeln!(out, "note: no formula reads '{key}'")?;
        }

        for (idx, formula) in readers.into_iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            self.print_card(formula, out)?;
        }
        Ok(())
    }

    fn print_card<W: Write>(
        &self,
        formula: &FormulaDefinition,
        out: &mut W,
    ) -> Result<()> {
        let outputs = formula.compute(&self.store);
        let card = FormulaCard::new(formula, &self.store, &outputs, &self.options);
        write!(out, "{card}")?;
        Ok(())
    }
}
