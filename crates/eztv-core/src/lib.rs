//! EZTV Scraper Core Library
//!
//! This crate provides the core scraping functionality for the EZTV
//! torrent index and its companion JSON API.
//!
//! # Features
//! - List every show known to the index
//! - Get a show's details and episode list, by numeric id or exact name
//! - Search episode releases by free-text query
//! - Query the torrent-listing API by page or by IMDb id

pub mod api;
pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use api::{ApiResponse, TorrentRecord};
pub use client::{ClientConfig, EztvClient};
pub use error::{EztvError, Result};
pub use scraper::EztvScraper;
pub use types::{Episode, Show, ShowDetail, ShowRef};
