//! Lenient numeric parsing for raw field text.
//!
//! Every formula reads its inputs through this module, so it is the single
//! place where user-typed text becomes a number. Nothing here ever fails:
//! text that does not describe a finite number collapses to a fallback.

use tracing::debug;

/// Normalizes input for numeric parsing: trims whitespace and removes commas (thousands separator).
fn normalize_numeric_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses raw field text into a finite number.
///
/// Handles comma as thousands separator (e.g. `"2,000"`). Returns `None` when
/// the text is absent, empty, unparseable, or parses to `NaN`/`±Infinity`.
///
/// # Examples
///
/// ```
/// use navcard_core::numeric::parse_optional;
///
/// assert_eq!(parse_optional(Some("1,234.5")), Some(1234.5));
/// assert_eq!(parse_optional(Some("")), None);
/// assert_eq!(parse_optional(Some("Infinity")), None);
/// assert_eq!(parse_optional(None), None);
/// ```
pub fn parse_optional(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    let normalized = normalize_numeric_input(raw);
    if normalized.is_empty() {
        return None;
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            debug!(input = %raw, %value, "non-finite numeric input ignored");
            None
        }
        Err(e) => {
            debug!(input = %raw, "unparseable numeric input: {}", e);
            None
        }
    }
}

/// Parses raw field text, substituting `fallback` for anything that is not a
/// finite number.
///
/// # Examples
///
/// ```
/// use navcard_core::numeric::parse_number;
///
/// assert_eq!(parse_number(Some("2,000"), 0.0), 2000.0);
/// assert_eq!(parse_number(Some("abc"), 0.0), 0.0);
/// assert_eq!(parse_number(None, 30.0), 30.0);
/// ```
pub fn parse_number(
    raw: Option<&str>,
    fallback: f64,
) -> f64 {
    parse_optional(raw).unwrap_or(fallback)
}

/// Shorthand for [`parse_number`] with the usual fallback of zero.
pub fn parse_or_zero(raw: Option<&str>) -> f64 {
    parse_number(raw, 0.0)
}
