//! Torrent-listing JSON API types
//!
//! The index site's companion API serves richer release records than the
//! HTML tables. The shapes here are a pass-through of the API's JSON; no
//! local invariants are imposed beyond the field types, and absent fields
//! fall back to serde defaults.

use serde::{Deserialize, Serialize};

/// Default number of records per API page
pub(crate) const DEFAULT_TORRENTS_LIMIT: u32 = 10;

/// Default API page number (1-based)
pub(crate) const DEFAULT_TORRENTS_PAGE: u32 = 1;

/// Response envelope of the `get-torrents` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// IMDb id echo when the query filtered by one
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Total number of records known to the API for this query
    pub torrents_count: u64,
    /// Page size used for this response
    pub limit: u32,
    /// Page number of this response (1-based)
    pub page: u32,
    /// Records on this page, in API order
    #[serde(default)]
    pub torrents: Vec<TorrentRecord>,
}

/// One release record as served by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentRecord {
    pub id: u64,
    pub hash: String,
    pub filename: String,
    pub episode_url: String,
    pub torrent_url: String,
    pub magnet_url: String,
    pub title: String,
    pub imdb_id: String,
    pub season: String,
    pub episode: String,
    pub small_screenshot: String,
    pub large_screenshot: String,
    pub seeds: u32,
    pub peers: u32,
    pub date_released_unix: u64,
    /// Size in bytes, served by the API as a string
    pub size_bytes: String,
}

/// Reduce an IMDb identifier to the digits the API expects.
///
/// The API takes the numeric part only, without the conventional "tt"
/// prefix; every non-digit character is stripped.
pub(crate) fn normalize_imdb_id(imdb_id: &str) -> String {
    imdb_id.chars().filter(|c| c.is_ascii_digit()).collect()
}
