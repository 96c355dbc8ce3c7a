//! Week-level result aggregates

use serde::Serialize;

use super::Entry;

/// Competitive division, determined by the results table caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Division {
    Male,
    Female,
}

impl Division {
    /// Map a table caption to a division.
    ///
    /// The archive captions its tables exactly `Men` and `Women`; any other
    /// caption (combined standings, team tables) identifies a table that is
    /// not a per-rider results table and is skipped by the extractor.
    pub fn from_caption(caption: &str) -> Option<Self> {
        match caption {
            "Men" => Some(Division::Male),
            "Women" => Some(Division::Female),
            _ => None,
        }
    }

    /// Single-letter code used in flat output rows.
    pub fn code(&self) -> &'static str {
        match self {
            Division::Male => "M",
            Division::Female => "F",
        }
    }
}

/// One week's event: segment reference plus both division result lists.
///
/// Built once by [`assemble_week`](crate::assemble_week) and immutable
/// afterwards. The `male` and `female` sequences preserve source document
/// row order (typically rank order; the extractor does not re-sort).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekResults {
    /// Week ordinal within the season (1-based)
    pub week: u32,
    /// Strava segment id the week's climb was scored on
    pub segment_id: i64,
    /// Men's results in document order
    pub male: Vec<Entry>,
    /// Women's results in document order
    pub female: Vec<Entry>,
}
