//! Data types for the EZTV scraper
//!
//! This module contains the core data structures produced by the HTML
//! extraction layer. All types implement Serialize and Deserialize for JSON
//! compatibility. Every value is immutable once constructed; nothing here is
//! persisted or mutated by the library.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A television series entry in the EZTV catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Numeric id assigned by the index site
    pub id: u32,
    /// Display title of the show
    pub title: String,
}

/// Detailed information about a show, including its episode list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowDetail {
    /// Display title of the show; never empty for a resolved show
    pub title: String,
    /// Short summary paragraph from the show page
    pub summary: String,
    /// Longer description block from the show page
    pub description: String,
    /// IMDb identifier in `tt<digits>` form, when the page links one
    pub imdb_id: Option<String>,
    /// Episode releases listed on the show page, in page order
    pub episodes: Vec<Episode>,
}

/// One downloadable episode release scraped from a result-table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Link to the show the release belongs to
    pub show_link: Option<String>,
    /// Release title with newline characters removed
    pub title: String,
    /// Magnet URI for the release
    pub magnet: Option<String>,
    /// Direct .torrent download link
    pub torrent: Option<String>,
    /// Release size in bytes; 0 when the size column is missing or garbled
    pub size: u64,
    /// Release date exactly as the site prints it
    pub released: String,
    /// Seeder count; 0 when the column is missing or non-numeric
    pub seeds: u32,
}

/// Identifier accepted by [`get_show`](crate::EztvScraper::get_show)
///
/// A show can be addressed either by its numeric site id or by its exact
/// title (matched case-insensitively against the full show list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowRef {
    /// Numeric id assigned by the index site
    Id(u32),
    /// Exact show title, matched case-insensitively
    Name(String),
}

impl From<u32> for ShowRef {
    fn from(id: u32) -> Self {
        ShowRef::Id(id)
    }
}

impl From<&str> for ShowRef {
    fn from(name: &str) -> Self {
        ShowRef::Name(name.to_string())
    }
}

impl From<String> for ShowRef {
    fn from(name: String) -> Self {
        ShowRef::Name(name)
    }
}

impl fmt::Display for ShowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowRef::Id(id) => write!(f, "{}", id),
            ShowRef::Name(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_ref_from_integer() {
        assert_eq!(ShowRef::from(481u32), ShowRef::Id(481));
    }

    #[test]
    fn test_show_ref_from_str() {
        assert_eq!(
            ShowRef::from("Dark Matter"),
            ShowRef::Name("Dark Matter".to_string())
        );
    }

    #[test]
    fn test_show_ref_from_string() {
        assert_eq!(
            ShowRef::from("Dark Matter".to_string()),
            ShowRef::Name("Dark Matter".to_string())
        );
    }

    #[test]
    fn test_show_ref_display() {
        assert_eq!(ShowRef::Id(481).to_string(), "481");
        assert_eq!(
            ShowRef::Name("Dark Matter".to_string()).to_string(),
            "Dark Matter"
        );
    }

    #[test]
    fn test_show_serialization_roundtrip() {
        let show = Show {
            id: 481,
            title: "Dark Matter".to_string(),
        };

        let json = serde_json::to_string(&show).unwrap();
        let deserialized: Show = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, show);
    }

    #[test]
    fn test_episode_serialization_absent_links() {
        let episode = Episode {
            show_link: None,
            title: "Some Release".to_string(),
            magnet: None,
            torrent: None,
            size: 0,
            released: "2 days ago".to_string(),
            seeds: 0,
        };

        let json = serde_json::to_string(&episode).unwrap();
        let deserialized: Episode = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, episode);
    }
}
