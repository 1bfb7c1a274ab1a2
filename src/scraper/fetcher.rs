// fetcher.rs
use crate::scraper::ScraperError;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0 Safari/537.36";

/// How often and how patiently a page fetch is retried.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_backoff: Duration,
    pub max_backoff: Duration,
    pub jitter: Duration,
}

impl RetryPolicy {
    /// Fail on the first error.
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            base_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    /// Linear backoff capped at `max_backoff`, without jitter.
    pub fn backoff(&self, attempt: u32) -> Duration {
        std::cmp::min(self.base_backoff * attempt, self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_backoff: Duration::from_secs(2),
            max_backoff: Duration::from_secs(10),
            jitter: Duration::from_secs(2),
        }
    }
}

pub struct PageFetcher {
    client: Client,
    retry: RetryPolicy,
}

impl PageFetcher {
    pub fn new(retry: RetryPolicy) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self { client, retry })
    }

    /// GET `url` and return the body, retrying per the fetcher's policy.
    pub fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let start = Instant::now();
            match self.try_fetch_html(url) {
                Ok(html) => {
                    debug!(url, attempt, elapsed = ?start.elapsed(), "fetched page");
                    return Ok(html);
                }
                Err(e) if attempt < attempts => {
                    warn!(url, attempt, error = %e, "fetch failed, retrying");
                    std::thread::sleep(self.retry.backoff(attempt) + self.jitter());
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn try_fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text()?)
    }

    fn jitter(&self) -> Duration {
        let max = self.retry.jitter.as_millis() as u64;
        if max == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..=max))
    }
}
