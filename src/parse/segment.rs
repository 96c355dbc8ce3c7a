//! Strava segment reference extraction.
//!
//! Each week's entry page links the climb to the Strava segment it is
//! scored on, but the page template changed across archive years: older
//! pages render a text anchor targeting Strava, newer ones wrap the Strava
//! logo image in a plain link. The extractor tries an ordered list of
//! lookup strategies and takes the first hit, so another template variant
//! is one more list entry rather than a deeper conditional.

use scraper::{ElementRef, Html};

use super::{fields, selector};
use crate::{ExtractError, Result};

/// One way of locating the outbound Strava link in an entry page.
struct LinkLookup {
    name: &'static str,
    find: fn(&Html) -> Result<Option<String>>,
}

/// Lookup strategies in preference order.
const LOOKUPS: [LinkLookup; 2] = [
    LinkLookup { name: "Strava anchor", find: anchor_href },
    LinkLookup { name: "Strava logo image", find: logo_href },
];

/// Extract the Strava segment id from a week's entry page.
///
/// The id is the trailing path segment of the link target
/// (`…/segments/12345`). Fails with [`ExtractError::NotFound`] when no
/// strategy locates a link, and [`ExtractError::Parse`] when the trailing
/// segment is not numeric.
pub fn extract_segment_id(doc: &Html) -> Result<i64> {
    for lookup in &LOOKUPS {
        if let Some(href) = (lookup.find)(doc)? {
            tracing::trace!(strategy = lookup.name, href = %href, "located segment link");
            return segment_id_from_href(&href);
        }
    }
    Err(ExtractError::not_found("Strava segment link"))
}

/// Anchor variant: `<a target="Strava" href="…">`.
fn anchor_href(doc: &Html) -> Result<Option<String>> {
    let anchor_sel = selector(r#"a[target="Strava"]"#)?;
    Ok(doc
        .select(&anchor_sel)
        .find_map(|a| a.value().attr("href"))
        .map(str::to_string))
}

/// Logo variant: `<a href="…"><img src="…/strava_logo.png"></a>`.
///
/// Matched on the image filename so the strategy survives the logo being
/// served from different directories across archive years.
fn logo_href(doc: &Html) -> Result<Option<String>> {
    let img_sel = selector("img[src]")?;
    for img in doc.select(&img_sel) {
        let src = img.value().attr("src").unwrap_or_default();
        let file = src.rsplit('/').next().unwrap_or(src);
        if !file.to_ascii_lowercase().contains("strava") {
            continue;
        }
        let link = img
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "a");
        if let Some(href) = link.and_then(|a| a.value().attr("href")) {
            return Ok(Some(href.to_string()));
        }
    }
    Ok(None)
}

fn segment_id_from_href(href: &str) -> Result<i64> {
    let tail = href.rsplit('/').next().unwrap_or(href);
    fields::parse_int(tail).map_err(|e| e.with_context("segment id"))
}
