//! Pagination walker
//!
//! Drives the page fetcher along the "More" token chain, feeding every
//! extracted comment through normalization and scoring. Pages are fetched
//! strictly one at a time; each page's token is only known after the
//! previous page has been parsed.

use crate::config::ScraperConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::error::{FetchError, ScrapeError};
use crate::models::CommentRecord;
use crate::parser::{extract_page, normalize};
use crate::sentiment::Scorer;

/// Termination mode for a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Stop once at least this many comments have been accumulated.
    /// Checked only at the top of the loop, so the final page may overshoot;
    /// truncation is the ranking step's job.
    TargetCount(usize),

    /// Stop after exactly this many pages regardless of comment count
    PageLimit(u32),
}

/// Pagination walker over the comment listing
///
/// Owns the fetcher and the scorer; the scorer is constructor-injected so
/// tests can substitute a deterministic stub.
pub struct Walker<S> {
    fetcher: PageFetcher,
    scorer: S,
    seed_url: String,
    strict: bool,
}

impl<S: Scorer> Walker<S> {
    /// Create a walker from its parts
    #[must_use]
    pub fn new(fetcher: PageFetcher, scorer: S, seed_url: impl Into<String>, strict: bool) -> Self {
        Self {
            fetcher,
            scorer,
            seed_url: seed_url.into(),
            strict,
        }
    }

    /// Create a walker from scraper configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn from_config(config: &ScraperConfig, scorer: S) -> Result<Self, FetchError> {
        let fetcher = PageFetcher::new(config)?;
        Ok(Self::new(
            fetcher,
            scorer,
            config.seed_url.clone(),
            config.strict_extraction,
        ))
    }

    /// Walk the listing until the stop condition is met
    ///
    /// Any fetch or parse failure aborts the walk and discards everything
    /// accumulated so far; the caller receives only the error.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError` on the first failed fetch or unparseable page
    pub async fn walk(&self, stop: StopCondition) -> Result<Vec<CommentRecord>, ScrapeError> {
        match stop {
            StopCondition::TargetCount(target) => self.walk_until_count(target).await,
            StopCondition::PageLimit(limit) => self.walk_pages(limit).await,
        }
    }

    /// Accumulate records until `target` is reached, scoring inline
    async fn walk_until_count(&self, target: usize) -> Result<Vec<CommentRecord>, ScrapeError> {
        let mut records = Vec::new();
        let mut current_url = self.seed_url.clone();
        let mut pages = 0u32;

        while records.len() < target {
            let html = self.fetcher.fetch(&current_url).await?;
            let page = extract_page(&html, self.strict)?;
            pages += 1;

            for (user, raw) in page.pairs() {
                records.push(CommentRecord::from_pair(user, raw, &self.scorer));
            }

            tracing::debug!(
                page = pages,
                new = page.len(),
                total = records.len(),
                target,
                "Processed comment page"
            );

            current_url = format!("{}{}", self.seed_url, page.next_token);
        }

        tracing::info!(
            pages,
            records = records.len(),
            target,
            "Completed target-count walk"
        );

        Ok(records)
    }

    /// Fetch exactly `limit` pages collecting raw pairs, then normalize and
    /// score in a downstream pass
    async fn walk_pages(&self, limit: u32) -> Result<Vec<CommentRecord>, ScrapeError> {
        let mut raw_pairs: Vec<(String, String)> = Vec::new();
        let mut current_url = self.seed_url.clone();

        for page_no in 1..=limit {
            let html = self.fetcher.fetch(&current_url).await?;
            let page = extract_page(&html, self.strict)?;

            for (user, raw) in page.pairs() {
                raw_pairs.push((user.to_string(), raw.to_string()));
            }

            tracing::debug!(
                page = page_no,
                limit,
                total = raw_pairs.len(),
                "Processed comment page"
            );

            current_url = format!("{}{}", self.seed_url, page.next_token);
        }

        let records: Vec<CommentRecord> = raw_pairs
            .into_iter()
            .map(|(user, raw)| {
                let cleaned_text = normalize(&raw);
                let score = self.scorer.score(&cleaned_text);
                CommentRecord {
                    user,
                    raw_text: raw,
                    cleaned_text,
                    score,
                }
            })
            .collect();

        tracing::info!(
            pages = limit,
            records = records.len(),
            "Completed page-limit walk"
        );

        Ok(records)
    }

    /// Collect successor page URLs by following the token chain
    ///
    /// Returns the URLs of the pages after the seed, `page_limit` of them,
    /// without extracting any comments.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError` on the first failed fetch or missing anchor
    pub async fn collect_page_urls(&self, page_limit: u32) -> Result<Vec<String>, ScrapeError> {
        let mut urls = Vec::new();
        let mut current_url = self.seed_url.clone();

        while urls.len() < page_limit as usize {
            let html = self.fetcher.fetch(&current_url).await?;
            let page = extract_page(&html, self.strict)?;

            let next = format!("{}{}", self.seed_url, page.next_token);
            urls.push(next.clone());
            current_url = next;
        }

        tracing::debug!(count = urls.len(), "Collected page URLs");

        Ok(urls)
    }
}
