//! Main EZTV scraper API
//!
//! This module provides the high-level API for the EZTV index site and its
//! companion JSON API. It combines the HTTP client with the parsers to
//! expose the four operation families: list shows, resolve one show, search
//! episodes, and query the torrent-listing API.

use crate::api::{normalize_imdb_id, ApiResponse, DEFAULT_TORRENTS_LIMIT, DEFAULT_TORRENTS_PAGE};
use crate::client::{ClientConfig, EztvClient};
use crate::error::{EztvError, Result};
use crate::parser::{parse_episode_rows, parse_show_detail, parse_show_list};
use crate::types::{Episode, Show, ShowDetail, ShowRef};

/// Main scraper API for EZTV
///
/// All operations are asynchronous; each issues at most one outbound
/// request (resolving a show by name issues two sequential ones). The
/// scraper holds no mutable state, so a single instance can be shared
/// freely across tasks.
///
/// # Example
/// ```no_run
/// use eztv_core::EztvScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = EztvScraper::new()?;
///
///     let episodes = scraper.search("game of thrones s01e01").await?;
///     println!("Found {} releases", episodes.len());
///
///     Ok(())
/// }
/// ```
pub struct EztvScraper {
    client: EztvClient,
}

impl EztvScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = EztvClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration (base URLs, timeout)
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = EztvClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Create a new scraper with a pre-configured client.
    pub fn with_client(client: EztvClient) -> Self {
        Self { client }
    }

    /// Get all shows listed on the index.
    ///
    /// # Returns
    /// * `Ok(Vec<Show>)` with id/title pairs in page order
    ///
    /// # Example
    /// ```no_run
    /// use eztv_core::EztvScraper;
    ///
    /// # async fn example() -> Result<(), eztv_core::EztvError> {
    /// let scraper = EztvScraper::new()?;
    /// let shows = scraper.get_shows().await?;
    /// println!("{} shows listed", shows.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_shows(&self) -> Result<Vec<Show>> {
        let html = self.client.fetch("/showlist/").await?;
        parse_show_list(&html)
    }

    /// Get a show and its episodes.
    ///
    /// Accepts a numeric site id or a show name. A name must match a listed
    /// title exactly apart from letter case; resolution then proceeds by the
    /// matched id, so both forms return identical results.
    ///
    /// # Arguments
    /// * `show` - A show id (`u32`) or show name (`&str` / `String`)
    ///
    /// # Returns
    /// * `Ok(ShowDetail)` with header metadata and the episode list
    /// * `Err(EztvError::NotFound)` when no listed title matches the name,
    ///   or the fetched page does not represent a real show
    ///
    /// # Example
    /// ```no_run
    /// use eztv_core::EztvScraper;
    ///
    /// # async fn example() -> Result<(), eztv_core::EztvError> {
    /// let scraper = EztvScraper::new()?;
    /// let by_id = scraper.get_show(481).await?;
    /// let by_name = scraper.get_show("Dark Matter").await?;
    /// assert_eq!(by_id.title, by_name.title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_show(&self, show: impl Into<ShowRef>) -> Result<ShowDetail> {
        match show.into() {
            ShowRef::Id(id) => self.get_show_by_id(id).await,
            ShowRef::Name(name) => {
                let shows = self.get_shows().await?;
                let wanted = name.to_lowercase();

                match shows.iter().find(|s| s.title.to_lowercase() == wanted) {
                    Some(show) => self.get_show_by_id(show.id).await,
                    None => Err(EztvError::NotFound(name)),
                }
            }
        }
    }

    /// Fetch and parse one show page by numeric id.
    async fn get_show_by_id(&self, id: u32) -> Result<ShowDetail> {
        let html = self.client.fetch(&format!("/shows/{}/", id)).await?;
        let detail = parse_show_detail(&html);

        // The site answers unknown ids with an ordinary page that simply
        // lacks a show title.
        if detail.title.is_empty() {
            return Err(EztvError::NotFound(id.to_string()));
        }

        Ok(detail)
    }

    /// Search for episode releases by free-text query.
    ///
    /// Returns whatever the single result page contains; no pagination. An
    /// empty result set means no match and is not an error.
    ///
    /// # Arguments
    /// * `query` - Free-text search query
    ///
    /// # Example
    /// ```no_run
    /// use eztv_core::EztvScraper;
    ///
    /// # async fn example() -> Result<(), eztv_core::EztvError> {
    /// let scraper = EztvScraper::new()?;
    /// for episode in scraper.search("game of thrones s01e01").await? {
    ///     println!("{} ({} seeds)", episode.title, episode.seeds);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<Episode>> {
        let encoded = urlencoding::encode(query);
        let html = self.client.fetch(&format!("/search/{}", encoded)).await?;
        Ok(parse_episode_rows(&html))
    }

    /// Get the first page of torrent records with the default page size.
    ///
    /// Shorthand for `get_torrents_page(10, 1)`.
    pub async fn get_torrents(&self) -> Result<ApiResponse> {
        self.get_torrents_page(DEFAULT_TORRENTS_LIMIT, DEFAULT_TORRENTS_PAGE)
            .await
    }

    /// Get a page of torrent records from the listing API.
    ///
    /// # Arguments
    /// * `limit` - Records per page
    /// * `page` - Page number (1-based)
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` with the decoded page
    /// * `Err(EztvError::Request)` on transport or JSON-decode failure;
    ///   a single attempt, no retries
    pub async fn get_torrents_page(&self, limit: u32, page: u32) -> Result<ApiResponse> {
        self.client
            .fetch_api(&format!("/get-torrents?limit={}&page={}", limit, page))
            .await
    }

    /// Get torrent records for one title by IMDb id.
    ///
    /// The identifier may carry the conventional "tt" prefix; every
    /// non-digit character is stripped before the request, as the API
    /// expects digits only.
    ///
    /// # Arguments
    /// * `imdb_id` - IMDb identifier, e.g. "tt6048596" or "6048596"
    ///
    /// # Example
    /// ```no_run
    /// use eztv_core::EztvScraper;
    ///
    /// # async fn example() -> Result<(), eztv_core::EztvError> {
    /// let scraper = EztvScraper::new()?;
    /// let response = scraper.get_torrents_by_imdb_id("tt6048596").await?;
    /// println!("{} records", response.torrents_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_torrents_by_imdb_id(&self, imdb_id: &str) -> Result<ApiResponse> {
        let digits = normalize_imdb_id(imdb_id);
        self.client
            .fetch_api(&format!("/get-torrents?imdb_id={}", digits))
            .await
    }
}
