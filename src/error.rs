//! Error types for the brine crate
//!
//! Domain-specific error enums for fetching, page extraction, input
//! validation, and the historical dataset loader, plus a unified [`Error`]
//! that wraps them for use across module boundaries.

use std::io;
use thiserror::Error;

/// Errors that can occur during HTTP fetching operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response status
    #[error("Server returned status {0}")]
    Status(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur while extracting a comment page
#[derive(Error, Debug)]
pub enum ParseError {
    /// The "More" pagination anchor is absent
    #[error("Pagination anchor not found in page")]
    MoreLinkNotFound,

    /// The pagination anchor carries no query string
    #[error("Pagination anchor has no page token")]
    PageTokenMissing,

    /// Username and comment counts differ (strict extraction only)
    #[error("Username/comment count mismatch: {users} users, {comments} comments")]
    CountMismatch { users: usize, comments: usize },
}

/// Invalid-argument errors, raised before any I/O
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Sentiment score outside [-1, 1]
    #[error("Sentiment score must be between -1 and 1, got {0}")]
    ScoreOutOfRange(f64),

    /// Classification threshold outside (0, 1)
    #[error("Threshold must be between 0 and 1 exclusive, got {0}")]
    ThresholdOutOfRange(f64),

    /// Dataset file count outside [0, 11]
    #[error("Dataset file count must be between 0 and 11, got {0}")]
    FileCountOutOfRange(usize),
}

/// Errors surfaced by a pagination walk
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Page extraction error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors surfaced by the historical dataset loader
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Invalid arguments, checked before any file is fetched
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Unified error type for the brine crate
///
/// Wraps the domain-specific errors so callers crossing module boundaries
/// can hold a single error type without losing detail.
#[derive(Error, Debug)]
pub enum Error {
    /// Pagination walk errors
    #[error("Scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    /// Fetch-specific errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Page extraction errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Dataset loader errors
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Invalid-argument errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_error_from_parse() {
        let err: ScrapeError = ParseError::MoreLinkNotFound.into();
        assert!(matches!(err, ScrapeError::Parse(_)));
    }

    #[test]
    fn test_unified_from_fetch() {
        let err: Error = FetchError::Status(503).into();
        assert!(matches!(err, Error::Fetch(FetchError::Status(503))));
    }

    #[test]
    fn test_validation_display() {
        let err = ValidationError::ThresholdOutOfRange(1.0);
        assert!(err.to_string().contains("between 0 and 1"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad seed URL");
        assert!(matches!(err, Error::Config(_)));
    }
}
