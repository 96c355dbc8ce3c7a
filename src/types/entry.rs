//! Per-rider result records

use serde::Serialize;
use std::time::Duration;

/// A competitor, identified by the series-wide rider number.
///
/// Rider ids are stable across years, so they can be used to join results
/// from different seasons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rider {
    /// Series-wide rider id
    pub id: i64,
    /// Display name as printed in the results table
    pub name: String,
}

/// One competitor's result in one week's table.
///
/// An `Entry` only exists when every field parsed successfully; partial
/// entries are never produced. Times and scores keep full precision here;
/// rendering (whole seconds, integral scores) is an output concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Finishing rank within the division (1-based)
    pub rank: u32,
    /// Who posted the result
    pub rider: Rider,
    /// Elapsed climb time, sub-second precision preserved
    pub elapsed_time: Duration,
    /// Series score for the week
    pub score: f64,
}
