//! brine - Hacker News comment sentiment scraper
//!
//! Scrapes paginated comment listings, cleans the extracted text, scores
//! each comment's polarity with a lexicon-based model, and ranks the result
//! with the most negative comments first.
//!
//! # Architecture
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - Page fetching and pagination walking
//! - [`parser`] - HTML extraction and text normalization
//! - [`sentiment`] - Polarity scoring and classification
//! - [`rank`] - Ranking aggregation and output shapes
//! - [`dataset`] - Historical CSV dataset loader
//! - [`models`] - Core data structures
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```no_run
//! use brine::config::Config;
//! use brine::crawler::{StopCondition, Walker};
//! use brine::rank::rank;
//! use brine::sentiment::SentimentScorer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let walker = Walker::from_config(&config.scraper, SentimentScorer::new())?;
//!     let records = walker.walk(StopCondition::TargetCount(100)).await?;
//!     let feed = rank(records, 100);
//!     println!("{}", serde_json::to_string_pretty(&feed)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod dataset;
pub mod error;
pub mod models;
pub mod parser;
pub mod rank;
pub mod sentiment;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::{PageFetcher, StopCondition, Walker};
    pub use crate::error::{Error, Result};
    pub use crate::models::CommentRecord;
    pub use crate::rank::{rank, rank_brief};
    pub use crate::sentiment::{classify, Scorer, Sentiment, SentimentScorer};
}

// Direct re-export for convenience
pub use models::CommentRecord;
