//! Division results table extraction.
//!
//! A results page carries zero or more `<table class="results">` blocks,
//! each captioned with the division it covers. Only the `Men` and `Women`
//! captions identify per-rider result tables; every other caption (team
//! standings, overall series tables) is skipped without error.
//!
//! Rows are fixed-width: nine `<td>` cells, of which rank (0), rider id (1),
//! rider name (2), elapsed time (5) and score (8) make up the output record.
//! The remaining cells exist in the source but are not part of the contract.
//! A row with any other cell count aborts the whole extraction: a width
//! drift means the archive layout changed, and rows parsed against the old
//! positions would be silently misaligned.
//!
//! Known limitation, carried from the archive itself: non-competitive
//! entrants (tandem and support riders) appear interleaved in the same
//! table structure with ordinary-looking times and scores. Nothing at the
//! row level distinguishes them, so they are emitted as regular entries and
//! callers must account for them downstream.

use scraper::{ElementRef, Html, Selector};

use super::{element_text, fields, selector};
use crate::{Division, Entry, ExtractError, Result, Rider};

/// Number of data cells in a well-formed results row.
pub const RESULT_ROW_CELLS: usize = 9;

/// Extract the men's and women's entry lists from a results document.
///
/// Entries are returned in source row order (typically rank order, but the
/// extractor does not re-sort). Either list may be empty when the matching
/// caption is absent. The first malformed row anywhere discards everything:
/// a half-built week record is unusable.
pub fn extract_divisions(doc: &Html) -> Result<(Vec<Entry>, Vec<Entry>)> {
    let table_sel = selector("table.results")?;
    let caption_sel = selector("caption")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    let mut male = Vec::new();
    let mut female = Vec::new();

    for table in doc.select(&table_sel) {
        let Some(caption) = table.select(&caption_sel).next() else {
            continue;
        };
        let Some(division) = Division::from_caption(element_text(caption).as_str()) else {
            continue;
        };

        let entries = extract_table(table, &row_sel, &cell_sel)?;
        match division {
            Division::Male => male.extend(entries),
            Division::Female => female.extend(entries),
        }
    }

    Ok((male, female))
}

/// Fold one table's rows into entries, short-circuiting on the first bad row.
fn extract_table(
    table: ElementRef,
    row_sel: &Selector,
    cell_sel: &Selector,
) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for row in table.select(row_sel) {
        let cells: Vec<ElementRef> = row.select(cell_sel).collect();
        if cells.is_empty() {
            // Header rows use <th> cells only
            continue;
        }
        if cells.len() != RESULT_ROW_CELLS {
            return Err(ExtractError::format(
                "results row",
                format!("expected {} cells, found {}", RESULT_ROW_CELLS, cells.len()),
            ));
        }
        entries.push(parse_row(&cells)?);
    }

    Ok(entries)
}

fn parse_row(cells: &[ElementRef]) -> Result<Entry> {
    let rank = fields::parse_int(&element_text(cells[0])).map_err(|e| e.with_context("rank"))?;
    let rank = u32::try_from(rank)
        .ok()
        .filter(|r| *r >= 1)
        .ok_or_else(|| ExtractError::parse("rank", format!("{rank} is not a positive rank")))?;

    let id = fields::parse_int(&element_text(cells[1])).map_err(|e| e.with_context("rider id"))?;
    let name = element_text(cells[2]);

    let elapsed_time = fields::parse_elapsed_time(&element_text(cells[5]))
        .map_err(|e| e.with_context("elapsed time"))?;
    let score =
        fields::parse_score(&element_text(cells[8])).map_err(|e| e.with_context("score"))?;

    Ok(Entry { rank, rider: Rider { id, name }, elapsed_time, score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn results_doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    fn row(rank: u32, id: i64, name: &str, time: &str, score: &str) -> String {
        format!(
            "<tr><td>{rank}</td><td>{id}</td><td>{name}</td>\
             <td>Los Gatos</td><td>34</td><td>{time}</td>\
             <td>12.1</td><td>5280</td><td>{score}</td></tr>"
        )
    }

    #[test]
    fn extracts_both_divisions_in_row_order() {
        let doc = results_doc(&format!(
            "<table class=\"results\"><caption>Men</caption>\
             <tr><th>Rank</th></tr>{}{}</table>\
             <table class=\"results\"><caption>Women</caption>{}</table>",
            row(1, 55, "A Rider", "59.2s", "100.00"),
            row(2, 81, "B Rider", "1:02.5", "96.41"),
            row(1, 902, "C Rider", "1:02:33", "100.00"),
        ));

        let (male, female) = extract_divisions(&doc).unwrap();
        assert_eq!(male.len(), 2);
        assert_eq!(female.len(), 1);

        assert_eq!(male[0].rank, 1);
        assert_eq!(male[0].rider, Rider { id: 55, name: "A Rider".into() });
        assert_eq!(male[0].elapsed_time, Duration::try_from_secs_f64(59.2).unwrap());
        assert_eq!(male[0].score, 100.0);

        assert_eq!(male[1].rank, 2);
        assert_eq!(male[1].elapsed_time, Duration::try_from_secs_f64(62.5).unwrap());

        assert_eq!(female[0].rider.id, 902);
        assert_eq!(female[0].elapsed_time, Duration::from_secs(3753));
    }

    #[test]
    fn header_rows_are_skipped_without_error() {
        let doc = results_doc(&format!(
            "<table class=\"results\"><caption>Men</caption>\
             <tr><th>Rank</th><th>Id</th><th>Name</th></tr>{}</table>",
            row(1, 55, "A Rider", "59.2", "100.00"),
        ));
        let (male, _) = extract_divisions(&doc).unwrap();
        assert_eq!(male.len(), 1);
    }

    #[test]
    fn wrong_cell_count_aborts_with_format_error() {
        let doc = results_doc(&format!(
            "<table class=\"results\"><caption>Men</caption>{}\
             <tr><td>2</td><td>81</td><td>B Rider</td><td>4:12.0</td><td>96.41</td></tr>\
             </table>",
            row(1, 55, "A Rider", "59.2", "100.00"),
        ));
        let err = extract_divisions(&doc).unwrap_err();
        match err {
            ExtractError::Format { details, .. } => {
                assert!(details.contains("found 5"), "details: {details}");
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn bad_row_in_later_table_discards_earlier_tables() {
        // Men's table parses cleanly, Women's has a malformed time: the
        // caller must see an error, not a partial week.
        let doc = results_doc(&format!(
            "<table class=\"results\"><caption>Men</caption>{}</table>\
             <table class=\"results\"><caption>Women</caption>{}</table>",
            row(1, 55, "A Rider", "59.2", "100.00"),
            row(1, 902, "C Rider", "n/a", "100.00"),
        ));
        assert!(extract_divisions(&doc).is_err());
    }

    #[test]
    fn unrecognized_captions_are_ignored() {
        let doc = results_doc(&format!(
            "<table class=\"results\"><caption>Tandem</caption>{}</table>\
             <table class=\"results\"><caption>Overall</caption>{}</table>",
            row(1, 700, "T Rider", "61.0", "88.00"),
            // Malformed on purpose: unrecognized tables must not be parsed at all
            "<tr><td>junk</td></tr>",
        ));
        let (male, female) = extract_divisions(&doc).unwrap();
        assert!(male.is_empty());
        assert!(female.is_empty());
    }

    #[test]
    fn tables_without_results_class_are_ignored() {
        let doc = results_doc(
            "<table><caption>Men</caption><tr><td>not</td><td>a</td>\
             <td>results</td><td>table</td></tr></table>",
        );
        let (male, female) = extract_divisions(&doc).unwrap();
        assert!(male.is_empty());
        assert!(female.is_empty());
    }

    #[test]
    fn non_positive_rank_is_parse_error() {
        let doc = results_doc(&format!(
            "<table class=\"results\"><caption>Men</caption>{}</table>",
            row(0, 55, "A Rider", "59.2", "100.00"),
        ));
        assert!(matches!(extract_divisions(&doc).unwrap_err(), ExtractError::Parse { .. }));
    }

    #[test]
    fn cell_markup_is_flattened_before_parsing() {
        let doc = results_doc(
            "<table class=\"results\"><caption>Men</caption>\
             <tr><td><b>1</b></td><td>55</td><td>A\n  Rider</td>\
             <td>x</td><td>x</td><td><i>59.2</i>s</td>\
             <td>x</td><td>x</td><td>100.00</td></tr></table>",
        );
        let (male, _) = extract_divisions(&doc).unwrap();
        assert_eq!(male[0].rank, 1);
        assert_eq!(male[0].rider.name, "A Rider");
        assert_eq!(male[0].elapsed_time, Duration::try_from_secs_f64(59.2).unwrap());
    }
}
