//! Show detail parser
//!
//! Parses a show's page into header metadata and its episode list.

use regex_lite::Regex;
use scraper::{Html, Selector};

use crate::types::ShowDetail;

use super::episode::collect_episode_rows;

/// Parse a show page into a [`ShowDetail`].
///
/// The title, summary, and description come from fixed locations in the
/// page markup; the episode list reuses the shared row extractor. A page
/// that does not represent a real show yields an empty title, which the
/// caller treats as "show not found".
///
/// # Arguments
/// * `html` - Raw HTML content of the show page
pub fn parse_show_detail(html: &str) -> ShowDetail {
    let document = Html::parse_document(html);

    ShowDetail {
        title: select_text(&document, r#".section_post_header [itemprop="name"]"#),
        summary: select_text(&document, r#"[itemprop="description"] p"#),
        // The description sits in a span reached through this exact sibling
        // chain after the summary span; the markup offers no better handle.
        description: select_text(
            &document,
            r#"span[itemprop="description"] + br + br + hr + br + span"#,
        ),
        imdb_id: extract_imdb_id(&document),
        episodes: collect_episode_rows(&document),
    }
}

/// Extract the `tt<digits>` IMDb id from the rating-section link.
fn extract_imdb_id(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"[itemprop="aggregateRating"] a"#).ok()?;
    let href = document.select(&selector).next()?.value().attr("href")?;
    let pattern = Regex::new(r"tt\d+").ok()?;
    pattern.find(href).map(|m| m.as_str().to_string())
}

/// Read the concatenated text of the first element matching `selector`,
/// or an empty string when nothing matches.
fn select_text(document: &Html, selector: &str) -> String {
    match Selector::parse(selector) {
        Ok(selector) => document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}
