//! Week result assembly.
//!
//! One week of the series is described by two archived pages: the entry
//! page (which carries the Strava segment reference) and the results page
//! (which carries the division tables). Assembly composes the two
//! extractors over that pair into a single [`WeekResults`].

use scraper::Html;

use crate::parse::{extract_divisions, extract_segment_id};
use crate::{Result, WeekResults};

/// Assemble one week's results from its entry and results documents.
///
/// Either extraction failing aborts the whole operation; a partial
/// `WeekResults` is never returned. Assembly owns no retry logic: one
/// failure is final for this week, and continuing across weeks is the
/// season aggregator's call.
pub fn assemble_week(week: u32, entry_page: &Html, results_page: &Html) -> Result<WeekResults> {
    let segment_id = extract_segment_id(entry_page)?;
    let (male, female) = extract_divisions(results_page)?;

    Ok(WeekResults { week, segment_id, male, female })
}
