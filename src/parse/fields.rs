//! Field parsers for free-text table cells.
//!
//! The archive's result tables were hand-edited over two decades, so cells
//! carry stray markup remnants, embedded whitespace, and unit suffixes. Each
//! parser here cleans its input before converting, and fails with a typed
//! error instead of guessing: a cell that cannot be read means the row (and
//! the week) cannot be trusted.
//!
//! Elapsed times are the worst offenders. The same table mixes `59.2`
//! (seconds only), `4:12.0` (minutes:seconds) and `1:02:33` (hours:minutes:
//! seconds), sometimes as `59.20s` or with whitespace inside the cell.
//! [`parse_elapsed_time`] normalizes all observed variants.

use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

use crate::{ExtractError, Result};

static TIME_CLEANER: OnceLock<Regex> = OnceLock::new();
static SCORE_CLEANER: OnceLock<Regex> = OnceLock::new();

/// Everything that is not a digit, colon, or period is noise in a time cell.
fn time_cleaner() -> &'static Regex {
    TIME_CLEANER.get_or_init(|| Regex::new(r"[^0-9:.]").unwrap())
}

/// Everything that is not a digit or period is noise in a score cell.
fn score_cleaner() -> &'static Regex {
    SCORE_CLEANER.get_or_init(|| Regex::new(r"[^0-9.]").unwrap())
}

/// Parse a base-10 signed integer from a trimmed cell.
pub fn parse_int(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ExtractError::parse("integer", format!("{trimmed:?} is not an integer")))
}

/// Parse a decimal number from a trimmed cell.
pub fn parse_float(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ExtractError::parse("number", format!("{trimmed:?} is not a number")))
}

/// Parse an elapsed time cell into a duration.
///
/// The cell is first stripped of every character that is not a digit, colon,
/// or period (which also removes unit suffixes like a trailing `s`), then
/// split on `:` into at most three segments read right-to-left as seconds,
/// minutes, hours. The seconds segment may carry a fractional part; the
/// others must be non-negative integers.
pub fn parse_elapsed_time(text: &str) -> Result<Duration> {
    let cleaned = time_cleaner().replace_all(text, "");
    if cleaned.is_empty() {
        return Err(ExtractError::format(
            "elapsed time",
            format!("{:?} contains no time value", text.trim()),
        ));
    }

    let segments: Vec<&str> = cleaned.split(':').collect();
    if segments.len() > 3 {
        return Err(ExtractError::format(
            "elapsed time",
            format!("{cleaned:?} has {} colon-separated segments, expected 1-3", segments.len()),
        ));
    }

    let (whole, fractional) = segments.split_at(segments.len() - 1);
    let seconds = parse_float(fractional[0]).map_err(|e| e.with_context("seconds"))?;

    let mut total = seconds;
    let mut scale = 60.0;
    // whole is [hours, minutes] or [minutes] or [], leftmost first
    for segment in whole.iter().rev() {
        let value = parse_int(segment).map_err(|e| e.with_context("time segment"))?;
        total += value as f64 * scale;
        scale *= 60.0;
    }

    Duration::try_from_secs_f64(total)
        .map_err(|_| ExtractError::parse("elapsed time", format!("{cleaned:?} is out of range")))
}

/// Parse a score cell into a float.
///
/// Scores in the source markup are sometimes embedded with unit labels or
/// leftover tags (`92 pts`, `<i>87.5</i>`); everything that is not a digit
/// or period is stripped before the numeric parse.
pub fn parse_score(text: &str) -> Result<f64> {
    let cleaned = score_cleaner().replace_all(text, "");
    parse_float(&cleaned).map_err(|e| e.with_context("score"))
}
