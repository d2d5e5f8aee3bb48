//! HTML parsers for EZTV pages
//!
//! This module contains parsers for extracting data from EZTV HTML pages:
//! - `shows`: Parse the show-index page
//! - `show`: Parse a show-detail page
//! - `episode`: Extract episode rows shared by show-detail and search pages
//! - `size`: Parse human-readable release sizes

pub mod episode;
pub mod show;
pub mod shows;
pub mod size;

// Re-export main parsing functions
pub use episode::{extract_episode, parse_episode_rows};
pub use show::parse_show_detail;
pub use shows::parse_show_list;
pub use size::parse_size;
