//! Cycle logic for the fetch → filter → select → publish sequence.
//!
//! Pure decision logic, decoupled from network and file I/O, so the
//! filtering and selection rules can be exercised without either.

use rand::seq::SliceRandom;

use crate::models::FeedItem;

/// Terminal state of a cycle that ran to completion.
///
/// A publish failure is not an outcome; it propagates as an error so
/// the caller decides logging and exit-status policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// One article was published and recorded in the ledger.
    Posted { title: String, url: String },
    /// Every fetched entry was already posted; nothing was sent.
    UpToDate,
}

/// Counters accumulated over one cycle's fetch phase.
#[derive(Debug, Default, Clone)]
pub struct CycleStats {
    /// Feeds that returned a parseable document.
    pub feeds_fetched: usize,
    /// Feeds skipped after a retrieval or parse failure.
    pub feeds_failed: usize,
    /// Raw entries seen across all fetched feeds, before filtering.
    pub entries_seen: usize,
    /// Entries that survived the ledger filter.
    pub entries_new: usize,
}

impl CycleStats {
    /// Creates a new empty stats tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a feed that fetched and parsed, contributing `entries`
    /// raw entries.
    pub fn record_fetched(&mut self, entries: usize) {
        self.feeds_fetched += 1;
        self.entries_seen += entries;
    }

    /// Records a feed skipped after a failure.
    pub fn record_failed(&mut self) {
        self.feeds_failed += 1;
    }

    /// Total number of endpoints visited this cycle.
    pub fn feeds_total(&self) -> usize {
        self.feeds_fetched + self.feeds_failed
    }
}

/// Drops every item whose URL the ledger already contains.
///
/// Membership is exact string match on the URL: no case folding, no
/// trailing-slash normalization. Input order is preserved. This is the
/// sole deduplication check.
pub fn filter_new<F>(items: Vec<FeedItem>, is_posted: F) -> Vec<FeedItem>
where
    F: Fn(&str) -> bool,
{
    items
        .into_iter()
        .filter(|item| !is_posted(&item.url))
        .collect()
}

/// Picks one item uniformly at random, or `None` when nothing is left.
///
/// One article per cycle is the product policy: however many items
/// survive the filter, at most one is ever handed to the publisher.
pub fn choose_one(items: &[FeedItem]) -> Option<&FeedItem> {
    items.choose(&mut rand::thread_rng())
}
