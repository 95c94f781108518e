//! Core data structures shared across the scraping pipeline

use serde::{Deserialize, Serialize};

/// One scraped comment after normalization and scoring
///
/// Created once per comment, immutable afterwards. The record keeps both the
/// raw extracted text and the cleaned text that was actually scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Username the comment is attributed to
    pub user: String,

    /// Comment text as extracted from the page
    pub raw_text: String,

    /// Comment text after normalization
    pub cleaned_text: String,

    /// Composite sentiment score in [-1, 1]
    pub score: f64,
}

impl CommentRecord {
    /// Build a record from an extracted (user, raw comment) pair, cleaning
    /// and scoring the text with the supplied pipeline pieces.
    pub fn from_pair(user: &str, raw_text: &str, scorer: &impl crate::sentiment::Scorer) -> Self {
        let cleaned_text = crate::parser::normalize(raw_text);
        let score = scorer.score(&cleaned_text);
        Self {
            user: user.to_string(),
            raw_text: raw_text.to_string(),
            cleaned_text,
            score,
        }
    }
}
