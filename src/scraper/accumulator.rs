// accumulator.rs
use crate::scraper::models::ListingRecord;
use crate::scraper::session::PageSession;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Insertion-ordered set of listings; a record equal field-by-field to one
/// already held is rejected.
#[derive(Debug, Default)]
pub struct ListingAccumulator {
    records: Vec<ListingRecord>,
    seen: HashSet<ListingRecord>,
}

impl ListingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the record was new.
    pub fn insert(&mut self, record: ListingRecord) -> bool {
        if self.seen.contains(&record) {
            return false;
        }
        self.seen.insert(record.clone());
        self.records.push(record);
        true
    }

    /// Merge a batch, returning how many records were new.
    pub fn merge(&mut self, batch: impl IntoIterator<Item = ListingRecord>) -> usize {
        batch
            .into_iter()
            .map(|r| self.insert(r))
            .filter(|added| *added)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn into_records(self) -> Vec<ListingRecord> {
        self.records
    }
}

/// When to stop re-reading a page.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlePolicy {
    /// Stop once this many unique listings are held.
    pub target_count: usize,
    pub max_attempts: u32,
    /// Wait before each read, letting lazy content load.
    pub settle_delay: Duration,
    /// Extra wait after a read that came up short.
    pub retry_delay: Duration,
}

impl Default for SettlePolicy {
    fn default() -> Self {
        Self {
            target_count: 25,
            max_attempts: 10,
            settle_delay: Duration::from_secs(1),
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Read the current page until `target_count` unique listings are held, the
/// attempts run out, or the page turns out to be the last one.
///
/// Short results are returned as-is. On a non-terminal page the result is
/// capped at `target_count`.
pub fn accumulate_page<S: PageSession>(session: &mut S, policy: &SettlePolicy) -> Vec<ListingRecord> {
    let mut acc = ListingAccumulator::new();

    for attempt in 1..=policy.max_attempts {
        session.settle(policy.settle_delay);

        match session.extract_listings() {
            Ok(batch) => {
                let added = acc.merge(batch);
                debug!(attempt, added, total = acc.len(), "merged listings");
            }
            Err(e) => warn!(attempt, error = %e, "extraction failed"),
        }

        if !session.has_next_control() {
            info!(unique = acc.len(), "last page detected");
            return acc.into_records();
        }

        if acc.len() >= policy.target_count {
            info!(attempt, unique = acc.len(), "target reached");
            let mut records = acc.into_records();
            records.truncate(policy.target_count);
            return records;
        }

        info!(attempt, unique = acc.len(), "waiting for more listings");
        if !policy.retry_delay.is_zero() {
            std::thread::sleep(policy.retry_delay);
        }
    }

    acc.into_records()
}
