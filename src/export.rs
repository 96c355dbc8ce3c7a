//! Flat CSV emission.
//!
//! One row per entry, men then women within each week. Rendering collapses
//! precision on purpose (whole seconds, integral scores) because that is
//! what the downstream spreadsheets expect; the underlying [`WeekResults`]
//! keep full precision for anyone rendering differently. Fields are written
//! bare: the archive's rider names contain no separators.

use std::io::{self, Write};

use crate::{Division, Entry, WeekResults};

/// CSV header naming every output column.
pub const CSV_HEADER: &str = "year,week,segment,gender,rank,id,name,time,score";

/// Write the header plus one row per entry for a season's weeks.
pub fn write_csv<W: Write>(mut out: W, year: u16, season: &[WeekResults]) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for week in season {
        for entry in &week.male {
            write_entry(&mut out, year, week, Division::Male, entry)?;
        }
        for entry in &week.female {
            write_entry(&mut out, year, week, Division::Female, entry)?;
        }
    }
    Ok(())
}

fn write_entry<W: Write>(
    out: &mut W,
    year: u16,
    week: &WeekResults,
    division: Division,
    entry: &Entry,
) -> io::Result<()> {
    writeln!(
        out,
        "{},{},{},{},{},{},{},{},{:.0}",
        year,
        week.week,
        week.segment_id,
        division.code(),
        entry.rank,
        entry.rider.id,
        entry.rider.name,
        entry.elapsed_time.as_secs(),
        entry.score,
    )
}
