//! Configuration management for brine
//!
//! This module handles loading and validating configuration from environment
//! variables, TOML files, and defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default seed URL for the Hacker News "new comments" listing
pub const DEFAULT_SEED_URL: &str = "https://news.ycombinator.com/newcomments?";

/// Default seed URL for the historical comment dataset
pub const DEFAULT_DATASET_SEED: &str =
    "https://github.com/Salty-Hackers/data-engineering/blob/main/Data/hn_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scraper configuration
    pub scraper: ScraperConfig,

    /// Historical dataset configuration
    pub dataset: DatasetConfig,

    /// Sentiment classification configuration
    pub sentiment: SentimentConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Scraper-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Seed URL for the comment listing (must end with its query separator)
    pub seed_url: String,

    /// User agent header; `None` omits the header entirely. Some servers
    /// reject requests without a browser-like agent, so the default is safe.
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Promote username/comment count mismatches to hard errors
    pub strict_extraction: bool,
}

/// Historical dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Seed URL prefix for the remote CSV files
    pub seed_url: String,

    /// Number of files to fetch (0..=11)
    pub file_count: usize,

    /// Maximum rows returned after sorting by timestamp
    pub row_limit: usize,
}

/// Sentiment classification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Classification threshold: score >= threshold is positive,
    /// score <= -threshold is negative
    pub threshold: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Every value falls back to its default when the variable is unset or
    /// unparseable. `BRINE_USER_AGENT=""` omits the User-Agent header.
    pub fn from_env() -> Result<Self> {
        let seed_url =
            std::env::var("BRINE_SEED_URL").unwrap_or_else(|_| String::from(DEFAULT_SEED_URL));

        let user_agent = match std::env::var("BRINE_USER_AGENT") {
            Ok(ua) if ua.is_empty() => None,
            Ok(ua) => Some(ua),
            Err(_) => Some(String::from("Mozilla/5.0")),
        };

        let request_timeout_secs = std::env::var("BRINE_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let strict_extraction = std::env::var("BRINE_STRICT_EXTRACTION")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let dataset_seed = std::env::var("BRINE_DATASET_SEED")
            .unwrap_or_else(|_| String::from(DEFAULT_DATASET_SEED));

        let file_count = std::env::var("BRINE_DATASET_FILES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(11);

        let row_limit = std::env::var("BRINE_DATASET_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(500_000);

        let threshold = std::env::var("BRINE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.05);

        let level = std::env::var("BRINE_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));
        let format = std::env::var("BRINE_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            scraper: ScraperConfig {
                seed_url,
                user_agent,
                request_timeout_secs,
                strict_extraction,
            },
            dataset: DatasetConfig {
                seed_url: dataset_seed,
                file_count,
                row_limit,
            },
            sentiment: SentimentConfig { threshold },
            logging: LoggingConfig { level, format },
        })
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.scraper.seed_url)
            .with_context(|| format!("Invalid seed URL: {}", self.scraper.seed_url))?;

        if self.scraper.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.dataset.file_count > 11 {
            anyhow::bail!("dataset file_count must be between 0 and 11");
        }

        if self.sentiment.threshold <= 0.0 || self.sentiment.threshold >= 1.0 {
            anyhow::bail!("sentiment threshold must be between 0 and 1 exclusive");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.scraper.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            dataset: DatasetConfig::default(),
            sentiment: SentimentConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            seed_url: String::from(DEFAULT_SEED_URL),
            user_agent: Some(String::from("Mozilla/5.0")),
            request_timeout_secs: 30,
            strict_extraction: false,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed_url: String::from(DEFAULT_DATASET_SEED),
            file_count: 11,
            row_limit: 500_000,
        }
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self { threshold: 0.05 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_user_agent() {
        let config = Config::default();
        assert_eq!(config.scraper.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn test_invalid_seed_url() {
        let mut config = Config::default();
        config.scraper.seed_url = String::from("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_threshold() {
        let mut config = Config::default();
        config.sentiment.threshold = 0.0;
        assert!(config.validate().is_err());

        config.sentiment.threshold = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_count() {
        let mut config = Config::default();
        config.dataset.file_count = 12;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_from_file_partial_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brine.toml");
        std::fs::write(
            &path,
            "[scraper]\nstrict_extraction = true\n\n[sentiment]\nthreshold = 0.1\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.scraper.strict_extraction);
        assert_eq!(config.sentiment.threshold, 0.1);
        // Omitted sections keep their defaults
        assert_eq!(config.dataset.file_count, 11);
        assert_eq!(config.scraper.seed_url, DEFAULT_SEED_URL);
    }
}
