//! Best-effort numeric extraction from free-text set fields
//!
//! Users type whatever they like into weight/rep/duration boxes ("20kg",
//! "30min", "1h", "Done"). These helpers pull a number out and never fail:
//! anything unreadable counts as 0.

use regex::Regex;
use std::sync::LazyLock;

/// First run of ASCII digits, with a fraction only when a digit follows the
/// dot ("12." is just 12, ".5" is 5)
static NUMERAL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").ok());

/// Extract the first decimal numeral in `text`, or 0.0 when there is none.
/// Numerals too long to fit an f64 also count as 0.
pub fn parse_value(text: &str) -> f64 {
  NUMERAL
    .as_ref()
    .and_then(|pattern| pattern.find(text))
    .and_then(|m| m.as_str().parse::<f64>().ok())
    .filter(|value| value.is_finite())
    .unwrap_or(0.0)
}

/// Parse a duration into minutes using a single unit hint.
///
/// Rules are checked in order and the first match wins:
/// - contains `h`: hours
/// - contains `s` but no `m`: seconds
/// - anything else: minutes
///
/// Only the first numeral is read, so "2h30m" is 120 minutes, not 150.
pub fn parse_duration(text: &str) -> f64 {
  let lower = text.to_lowercase();
  let value = parse_value(&lower);

  if lower.contains('h') {
    value * 60.0
  } else if lower.contains('s') && !lower.contains('m') {
    value / 60.0
  } else {
    value
  }
}
