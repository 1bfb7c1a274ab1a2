// session.rs
use crate::scraper::extract::ListingSelectors;
use crate::scraper::models::ListingRecord;
use crate::scraper::static_pages::FetchHtml;
use crate::scraper::ScraperError;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// A live view of one results page that can be re-read and paginated.
pub trait PageSession {
    /// Identifier of the page currently shown (its URL).
    fn current_id(&self) -> String;

    /// Give dynamic content time to appear before the next extraction.
    fn settle(&mut self, wait: Duration);

    fn extract_listings(&mut self) -> Result<Vec<ListingRecord>, ScraperError>;

    /// Whether the current page shows a "next" control.
    fn has_next_control(&self) -> bool;

    /// Activate the "next" control.
    fn follow_next(&mut self) -> Result<(), ScraperError>;
}

/// [`PageSession`] over plain HTTP: pages are fetched, parsed with CSS
/// selectors and the "next" link is followed by URL.
pub struct HttpSession<'a, F> {
    fetcher: &'a F,
    selectors: &'a ListingSelectors,
    current: Url,
    html: String,
    settled: bool,
}

impl<'a, F: FetchHtml> HttpSession<'a, F> {
    pub fn open(
        fetcher: &'a F,
        selectors: &'a ListingSelectors,
        start_url: &str,
    ) -> Result<Self, ScraperError> {
        let current = Url::parse(start_url)?;
        let html = fetcher.fetch_html(current.as_str())?;

        Ok(Self {
            fetcher,
            selectors,
            current,
            html,
            settled: false,
        })
    }

    fn next_url(&self) -> Option<Url> {
        self.selectors.next_page_url(&self.html, &self.current)
    }
}

impl<F: FetchHtml> PageSession for HttpSession<'_, F> {
    fn current_id(&self) -> String {
        self.current.to_string()
    }

    /// The first settle only waits; later ones also reload the page.
    fn settle(&mut self, wait: Duration) {
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        if !self.settled {
            self.settled = true;
            return;
        }

        match self.fetcher.fetch_html(self.current.as_str()) {
            Ok(html) => self.html = html,
            Err(e) => warn!(url = %self.current, error = %e, "reload failed, keeping previous content"),
        }
    }

    fn extract_listings(&mut self) -> Result<Vec<ListingRecord>, ScraperError> {
        Ok(self.selectors.extract_listings(&self.html))
    }

    fn has_next_control(&self) -> bool {
        self.next_url().is_some()
    }

    fn follow_next(&mut self) -> Result<(), ScraperError> {
        let next = self
            .next_url()
            .ok_or_else(|| ScraperError::Navigation(format!("no next control on {}", self.current)))?;

        debug!(from = %self.current, to = %next, "following next control");
        self.html = self.fetcher.fetch_html(next.as_str())?;
        self.current = next;
        self.settled = false;
        Ok(())
    }
}
