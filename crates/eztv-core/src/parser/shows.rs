//! Show list parser
//!
//! Parses the show-index page into id/title pairs.

use regex_lite::Regex;
use scraper::{Html, Selector};

use crate::error::{EztvError, Result};
use crate::types::Show;

/// Parse the show-index page into the full show catalog.
///
/// Every `a.thread_link` anchor whose href matches `shows/<digits>/`
/// contributes one [`Show`]; the captured digits become the id and the
/// anchor text the title. Anchors that do not match the path pattern are
/// silently dropped rather than reported.
///
/// # Arguments
/// * `html` - Raw HTML content of the show-index page
pub fn parse_show_list(html: &str) -> Result<Vec<Show>> {
    let document = Html::parse_document(html);
    let mut shows = Vec::new();

    let anchor_selector = Selector::parse("a.thread_link")
        .map_err(|e| EztvError::Parse(format!("invalid selector: {:?}", e)))?;
    let id_pattern = Regex::new(r"shows/(\d+)/")
        .map_err(|e| EztvError::Parse(format!("invalid pattern: {}", e)))?;

    for anchor in document.select(&anchor_selector) {
        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => continue,
        };
        let captures = match id_pattern.captures(href) {
            Some(captures) => captures,
            None => continue,
        };
        let id = match captures[1].parse::<u32>() {
            Ok(id) => id,
            Err(_) => continue,
        };

        shows.push(Show {
            id,
            title: anchor.text().collect::<String>(),
        });
    }

    Ok(shows)
}
