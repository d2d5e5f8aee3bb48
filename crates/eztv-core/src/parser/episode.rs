//! Episode row extractor
//!
//! Both the show-detail page and the search-results page list releases in
//! the same fixed six-column table layout, one `[name="hover"]` row per
//! release. This module turns a row into an [`Episode`] and is shared by
//! both flows.

use scraper::{ElementRef, Html, Selector};

use crate::types::Episode;

use super::size::parse_size;

/// Extract all episode rows from a result page.
///
/// # Arguments
/// * `html` - Raw HTML content of a show-detail or search-results page
///
/// # Returns
/// Episodes in page order; empty when the page lists none.
pub fn parse_episode_rows(html: &str) -> Vec<Episode> {
    let document = Html::parse_document(html);
    collect_episode_rows(&document)
}

/// Extract all episode rows from an already-parsed document.
pub(crate) fn collect_episode_rows(document: &Html) -> Vec<Episode> {
    match Selector::parse(r#"[name="hover"]"#) {
        Ok(selector) => document
            .select(&selector)
            .map(|row| extract_episode(&row))
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Transform a result-table row into an [`Episode`].
///
/// Field extraction is positional by column index, mirroring the site's
/// fixed table layout. The torrent link is read only from the `.download_1`
/// anchor; the `.download_2` anchor in the same column carries spam and
/// malware links on the source site and must never be parsed.
///
/// Missing cells and unreadable values degrade to `None` or 0 per field;
/// this function has no failure mode.
pub fn extract_episode(row: &ElementRef) -> Episode {
    Episode {
        show_link: select_attr(row, "td:nth-child(1) a", "href"),
        title: strip_newlines(&select_text(row, "td:nth-child(2)")),
        magnet: select_attr(row, "td:nth-child(3) .magnet", "href")
            .map(|href| strip_newlines(&href)),
        torrent: select_attr(row, "td:nth-child(3) .download_1", "href")
            .map(|href| strip_newlines(&href)),
        size: parse_size(&select_text(row, "td:nth-child(4)")),
        released: select_text(row, "td:nth-child(5)"),
        seeds: select_text(row, "td:nth-child(6)").trim().parse().unwrap_or(0),
    }
}

/// Read an attribute of the first element matching `selector` within `row`.
fn select_attr(row: &ElementRef, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    row.select(&selector)
        .next()?
        .value()
        .attr(attr)
        .map(|value| value.to_string())
}

/// Read the concatenated text of the first element matching `selector`
/// within `row`, or an empty string when nothing matches.
fn select_text(row: &ElementRef, selector: &str) -> String {
    match Selector::parse(selector) {
        Ok(selector) => row
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

fn strip_newlines(text: &str) -> String {
    text.replace('\n', "")
}
