//! Document extraction: free-text field parsing, results tables, and the
//! Strava segment reference.
//!
//! Everything in this module is pure computation over already-parsed
//! documents. Documents are borrowed for the duration of a call and never
//! mutated; all I/O lives in [`crate::archive`].

mod fields;
mod segment;
mod table;

pub use fields::{parse_elapsed_time, parse_float, parse_int, parse_score};
pub use segment::extract_segment_id;
pub use table::{RESULT_ROW_CELLS, extract_divisions};

use scraper::{ElementRef, Selector};

use crate::{ExtractError, Result};

/// Compile a CSS selector, surfacing a bad literal as an error instead of a
/// panic.
fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExtractError::Selector { details: e.to_string() })
}

/// Text content of an element with nested tags flattened and whitespace
/// collapsed, the way a browser would render the cell.
fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
}
