//! Season aggregation.
//!
//! Weeks are independent of each other: each one is a pair of documents and
//! a side-effect-free assembly, so the whole season is loaded and assembled
//! concurrently. A week that fails (page missing from the mirror, layout
//! drift, unreadable cell) is logged and skipped; the season only fails
//! when no week at all could be assembled.

use futures::future::join_all;
use scraper::Html;
use tracing::{debug, warn};

use crate::archive::ArchiveSource;
use crate::assemble::assemble_week;
use crate::{ExtractError, Result, WeekResults};

/// Number of scored weeks in every archived season.
pub const WEEKS_PER_SEASON: u32 = 10;

/// Extract every assemblable week of a season, in week order.
///
/// Per-week failures are reported through `tracing` and skipped. When not a
/// single week succeeds the last failure is returned, since a season with
/// zero weeks means the archive root or year is wrong rather than a page
/// being off.
pub async fn extract_year<S>(source: &S, year: u16) -> Result<Vec<WeekResults>>
where
    S: ArchiveSource + Sync,
{
    let weeks = 1..=WEEKS_PER_SEASON;
    let outcomes = join_all(weeks.clone().map(|week| extract_week(source, year, week))).await;

    let mut results = Vec::new();
    let mut last_error: Option<ExtractError> = None;

    for (week, outcome) in weeks.zip(outcomes) {
        match outcome {
            Ok(week_results) => results.push(week_results),
            Err(error) => {
                warn!(year, week, %error, "skipping week");
                last_error = Some(error);
            }
        }
    }

    debug!(year, weeks = results.len(), "season extraction complete");

    if results.is_empty() {
        return Err(last_error
            .unwrap_or_else(|| ExtractError::not_found("any week in season")));
    }
    Ok(results)
}

/// Load and assemble a single week.
async fn extract_week<S>(source: &S, year: u16, week: u32) -> Result<WeekResults>
where
    S: ArchiveSource + Sync,
{
    let docs = source.week_documents(year, week).await?;
    let entry = Html::parse_document(&docs.entry_page);
    let results = Html::parse_document(&docs.results_page);
    assemble_week(week, &entry, &results)
}
