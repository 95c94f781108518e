//! HTTP page fetcher
//!
//! A thin, deliberately retry-free fetcher: one GET per page, a
//! browser-like User-Agent by default (the listing rejects some default
//! agents), and an error on anything but a success status. A failed fetch
//! aborts the whole walk; re-invocation is cheap and idempotent.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

use crate::config::ScraperConfig;
use crate::error::FetchError;

/// Single-request page fetcher
pub struct PageFetcher {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// User agent header; `None` omits the header
    user_agent: Option<String>,

    /// Optional base URL override for testing with mock servers
    base_url: Option<String>,
}

impl PageFetcher {
    /// Create a fetcher from scraper configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        Self::with_timeout(
            config.user_agent.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Create a fetcher with an explicit user agent and timeout
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_timeout(
        user_agent: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;

        Ok(Self {
            client,
            user_agent,
            base_url: None,
        })
    }

    /// Create a fetcher that prepends `base_url` to every request, for
    /// testing against mock servers
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_base_url(base_url: &str, config: &ScraperConfig) -> Result<Self, FetchError> {
        let mut fetcher = Self::new(config)?;
        fetcher.base_url = Some(base_url.to_string());
        Ok(fetcher)
    }

    /// Fetch one page and return its body
    ///
    /// Issues a single GET with no retry; any network failure, timeout, or
    /// non-success status is surfaced immediately.
    ///
    /// # Errors
    ///
    /// `FetchError::Status` for non-2xx responses, `FetchError::Timeout`
    /// when the request times out, `FetchError::Http` otherwise
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let full_url = if let Some(base) = &self.base_url {
            format!("{base}{url}")
        } else {
            url.to_string()
        };

        tracing::debug!(url = %full_url, "Fetching page");

        let request = self.client.get(&full_url).headers(self.build_headers());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(body)
    }

    /// Build request headers, including the configured User-Agent if any
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(agent) = &self.user_agent {
            if let Ok(value) = HeaderValue::from_str(agent) {
                headers.insert(USER_AGENT, value);
            }
        }

        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScraperConfig;

    #[test]
    fn test_fetcher_creation() {
        let config = ScraperConfig::default();
        assert!(PageFetcher::new(&config).is_ok());
    }

    #[test]
    fn test_default_user_agent_header() {
        let fetcher = PageFetcher::new(&ScraperConfig::default()).unwrap();
        let headers = fetcher.build_headers();
        assert_eq!(headers.get(USER_AGENT).unwrap().to_str().unwrap(), "Mozilla/5.0");
    }

    #[test]
    fn test_omitted_user_agent_header() {
        let config = ScraperConfig {
            user_agent: None,
            ..Default::default()
        };
        let fetcher = PageFetcher::new(&config).unwrap();
        assert!(fetcher.build_headers().is_empty());
    }

    #[test]
    fn test_base_url_override() {
        let config = ScraperConfig::default();
        let fetcher = PageFetcher::with_base_url("http://localhost:8080", &config).unwrap();
        assert_eq!(fetcher.base_url.as_deref(), Some("http://localhost:8080"));
    }
}
