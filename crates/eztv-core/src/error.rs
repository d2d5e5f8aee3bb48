//! Error types for the EZTV scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for EZTV scraper operations
#[derive(Error, Debug)]
pub enum EztvError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Torrent API call failed (transport or JSON decoding)
    #[error("torrent API request failed: {0}")]
    Request(String),

    /// No show matched the given identifier
    #[error("did not find a show matching {0}")]
    NotFound(String),

    /// Failed to parse HTML content
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

/// Result type alias for EZTV scraper operations
pub type Result<T> = std::result::Result<T, EztvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_request() {
        let error = EztvError::Request("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "torrent API request failed: connection refused"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = EztvError::NotFound("Dark Matter".to_string());
        assert_eq!(error.to_string(), "did not find a show matching Dark Matter");
    }

    #[test]
    fn test_error_display_not_found_numeric() {
        let error = EztvError::NotFound("481".to_string());
        assert_eq!(error.to_string(), "did not find a show matching 481");
    }

    #[test]
    fn test_error_display_parse() {
        let error = EztvError::Parse("invalid selector".to_string());
        assert_eq!(error.to_string(), "failed to parse HTML: invalid selector");
    }
}
