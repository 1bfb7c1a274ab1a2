// static_pages.rs
use crate::scraper::extract::ListingSelectors;
use crate::scraper::fetcher::PageFetcher;
use crate::scraper::models::PageBatch;
use crate::scraper::ScraperError;
use std::time::Duration;
use tracing::{info, warn};

/// Anything that can turn a URL into page HTML.
pub trait FetchHtml {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError>;
}

impl FetchHtml for PageFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        PageFetcher::fetch_html(self, url)
    }
}

/// Walks numbered result pages `1..=last_page`, yielding one batch per page.
///
/// A page that fails to fetch is logged and yields an empty batch; the walk
/// goes on to the next page number. `delay` is slept between fetches.
pub struct StaticPages<'a, F> {
    fetcher: &'a F,
    selectors: &'a ListingSelectors,
    url_template: String,
    next_page: usize,
    last_page: usize,
    delay: Duration,
}

impl<'a, F: FetchHtml> StaticPages<'a, F> {
    /// `url_template` must contain a `{}` placeholder for the page number.
    pub fn new(
        fetcher: &'a F,
        selectors: &'a ListingSelectors,
        url_template: &str,
        last_page: usize,
        delay: Duration,
    ) -> Result<Self, ScraperError> {
        if !url_template.contains("{}") {
            return Err(ScraperError::Config(format!(
                "URL template '{url_template}' has no '{{}}' page placeholder"
            )));
        }

        Ok(Self {
            fetcher,
            selectors,
            url_template: url_template.to_string(),
            next_page: 1,
            last_page,
            delay,
        })
    }

    pub fn page_url(&self, page: usize) -> String {
        self.url_template.replacen("{}", &page.to_string(), 1)
    }
}

impl<F: FetchHtml> Iterator for StaticPages<'_, F> {
    type Item = PageBatch;

    fn next(&mut self) -> Option<PageBatch> {
        if self.next_page > self.last_page {
            return None;
        }
        let page = self.next_page;
        self.next_page += 1;

        if page > 1 && !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let url = self.page_url(page);
        info!(page, url = %url, "scraping page");

        let listings = match self.fetcher.fetch_html(&url) {
            Ok(html) => self.selectors.extract_listings(&html),
            Err(e) => {
                warn!(page, error = %e, "error fetching page");
                Vec::new()
            }
        };

        info!(page, count = listings.len(), "page parsed");
        Some(PageBatch {
            page,
            url,
            listings,
        })
    }
}
