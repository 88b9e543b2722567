//! LibCal hours HTTP client.

use std::time::Duration;

use tracing::debug;

use crate::domain::LibraryStatusIndex;

use super::convert::parse_feed;
use super::error::{FetchError, MAX_ERROR_BODY_CHARS};
use super::source::HoursSource;

/// Default hours feed: today's hours for every location in the institution.
pub const DEFAULT_URL: &str =
    "https://api3.libcal.com/api_hours_today.php?iid=1647&lid=0&format=json&systemTime=1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the hours client.
#[derive(Debug, Clone)]
pub struct HoursConfig {
    /// Feed URL (defaults to the production LibCal feed)
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HoursConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom feed URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the LibCal hours feed.
///
/// Makes exactly one GET per fetch. Transport and decode failures come back
/// as [`FetchError`]; nothing is retried.
#[derive(Debug, Clone)]
pub struct HoursClient {
    http: reqwest::Client,
    url: String,
}

impl HoursClient {
    /// Create a new hours client.
    pub fn new(config: HoursConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The feed URL this client reads.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw feed body.
    async fn fetch_body(&self) -> Result<String, FetchError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        Ok(response.text().await?)
    }
}

impl HoursSource for HoursClient {
    async fn fetch(&self) -> Result<LibraryStatusIndex, FetchError> {
        debug!(url = %self.url, "fetching library hours");
        let body = self.fetch_body().await?;
        parse_feed(&body)
    }
}
