//! Sentiment scoring and classification
//!
//! Wraps the VADER lexicon/rule-based polarity model. The analyzer's
//! lexicons are loaded once when the scorer is constructed and reused for
//! every comment; the scorer is read-only afterwards.

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::ValidationError;

/// Default classification threshold
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Anything that can turn text into a composite polarity score in [-1, 1]
///
/// The production implementation is [`SentimentScorer`]; tests substitute a
/// deterministic stub.
pub trait Scorer {
    /// Score `text`, -1 most negative, +1 most positive
    fn score(&self, text: &str) -> f64;
}

/// VADER-backed sentiment scorer
pub struct SentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentScorer {
    /// Construct a scorer, loading the model lexicons
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for SentimentScorer {
    fn score(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        // The model's compound score is already normalized to [-1, 1];
        // the clamp guards the record invariant against float drift
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}

/// Categorical sentiment derived from a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Lowercase label used in output
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a composite score against a threshold
///
/// `score >= threshold` is positive and `score <= -threshold` is negative,
/// both inclusive; everything strictly between is neutral.
///
/// # Errors
///
/// Returns [`ValidationError`] if `score` is outside [-1, 1] or `threshold`
/// is outside the open interval (0, 1). Checked before anything else.
///
/// # Examples
///
/// ```
/// use brine::sentiment::{classify, Sentiment, DEFAULT_THRESHOLD};
///
/// assert_eq!(classify(0.8, DEFAULT_THRESHOLD).unwrap(), Sentiment::Positive);
/// assert_eq!(classify(0.0, DEFAULT_THRESHOLD).unwrap(), Sentiment::Neutral);
/// assert!(classify(1.5, DEFAULT_THRESHOLD).is_err());
/// ```
pub fn classify(score: f64, threshold: f64) -> Result<Sentiment, ValidationError> {
    if !(-1.0..=1.0).contains(&score) {
        return Err(ValidationError::ScoreOutOfRange(score));
    }

    if threshold <= 0.0 || threshold >= 1.0 {
        return Err(ValidationError::ThresholdOutOfRange(threshold));
    }

    if score >= threshold {
        Ok(Sentiment::Positive)
    } else if score <= -threshold {
        Ok(Sentiment::Negative)
    } else {
        Ok(Sentiment::Neutral)
    }
}
