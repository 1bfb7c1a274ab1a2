// pagination.rs
use crate::scraper::accumulator::{accumulate_page, ListingAccumulator, SettlePolicy};
use crate::scraper::session::PageSession;
use crate::sinks::{ListingSink, SinkError};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum TerminalReason {
    NoNextControl,
    /// The page identifier did not change after following "next".
    Stalled,
    NavigationFailed(String),
    PageLimit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    HasNext,
    Terminal(TerminalReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub pages: usize,
    pub records: usize,
    pub reason: TerminalReason,
}

/// Drives a [`PageSession`] page by page, persisting each page's listings
/// to a sink before moving on.
pub struct PaginationDriver<'a, S> {
    session: &'a mut S,
    policy: SettlePolicy,
    max_pages: Option<usize>,
    state: PageState,
    seen: ListingAccumulator,
    pages: usize,
    records: usize,
}

impl<'a, S: PageSession> PaginationDriver<'a, S> {
    pub fn new(session: &'a mut S, policy: SettlePolicy, max_pages: Option<usize>) -> Self {
        Self {
            session,
            policy,
            max_pages,
            state: PageState::HasNext,
            seen: ListingAccumulator::new(),
            pages: 0,
            records: 0,
        }
    }

    /// Process the current page and try to move to the next one.
    /// Does nothing once the driver is terminal.
    pub fn step(&mut self, sink: &mut dyn ListingSink) -> Result<&PageState, SinkError> {
        if self.state != PageState::HasNext {
            return Ok(&self.state);
        }

        let page_id = self.session.current_id();
        let listings = accumulate_page(self.session, &self.policy);

        // Listings already saved from an earlier page are not written again.
        let fresh: Vec<_> = listings
            .into_iter()
            .filter(|r| self.seen.insert(r.clone()))
            .collect();

        sink.write_page(&fresh)?;
        self.pages += 1;
        self.records += fresh.len();
        info!(page = self.pages, url = %page_id, saved = fresh.len(), "page saved");

        self.state = self.advance(&page_id);
        Ok(&self.state)
    }

    fn advance(&mut self, page_id: &str) -> PageState {
        if self.max_pages.is_some_and(|max| self.pages >= max) {
            return PageState::Terminal(TerminalReason::PageLimit);
        }
        if !self.session.has_next_control() {
            return PageState::Terminal(TerminalReason::NoNextControl);
        }

        if let Err(e) = self.session.follow_next() {
            warn!(error = %e, "error clicking next control");
            return PageState::Terminal(TerminalReason::NavigationFailed(e.to_string()));
        }

        if self.session.current_id() == page_id {
            info!(url = %page_id, "page did not change, no more pages");
            return PageState::Terminal(TerminalReason::Stalled);
        }

        PageState::HasNext
    }

    /// Step until terminal, then finish the sink.
    pub fn run(mut self, sink: &mut dyn ListingSink) -> Result<SessionReport, SinkError> {
        while self.state == PageState::HasNext {
            self.step(sink)?;
        }
        sink.finish()?;

        let reason = match self.state {
            PageState::Terminal(reason) => reason,
            PageState::HasNext => TerminalReason::NoNextControl,
        };
        Ok(SessionReport {
            pages: self.pages,
            records: self.records,
            reason,
        })
    }
}
