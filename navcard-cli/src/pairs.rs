//! `key=value` arguments for `eval` and the interactive session.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairParseError {
    #[error("expected key=value, got '{0}'")]
    MissingEquals(String),

    #[error("missing key before '=' in '{0}'")]
    EmptyKey(String),
}

/// Splits `key=value` at the first `=`.
///
/// The key is trimmed. The value is kept as typed apart from surrounding
/// whitespace, so `distNM=2,000` stores `"2,000"` and `customMin=` stores an
/// empty string.
pub fn parse_pair(text: &str) -> Result<(String, String), PairParseError> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| PairParseError::MissingEquals(text.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(PairParseError::EmptyKey(text.to_string()));
    }

    Ok((key.to_string(), value.trim().to_string()))
}
