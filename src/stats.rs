//! Campaign counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters describing generator activity. Updates are relaxed; the
/// numbers are for reporting, not coordination.
#[derive(Debug, Default)]
pub struct Stats {
    records: AtomicU64,
    dup_states: AtomicU64,
    parents_expanded: AtomicU64,
    children_queued: AtomicU64,
    subsumed: AtomicU64,
    records_retired: AtomicU64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn inc_records(&self) {
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_dup_states(&self) {
        self.dup_states.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_parents_expanded(&self) {
        self.parents_expanded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_children_queued(&self, n: u64) {
        self.children_queued.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn inc_subsumed(&self) {
        self.subsumed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_records_retired(&self) {
        self.records_retired.fetch_add(1, Ordering::Relaxed);
    }

    pub fn records(&self) -> u64 {
        self.records.load(Ordering::Relaxed)
    }

    pub fn dup_states(&self) -> u64 {
        self.dup_states.load(Ordering::Relaxed)
    }

    pub fn parents_expanded(&self) -> u64 {
        self.parents_expanded.load(Ordering::Relaxed)
    }

    pub fn children_queued(&self) -> u64 {
        self.children_queued.load(Ordering::Relaxed)
    }

    pub fn subsumed(&self) -> u64 {
        self.subsumed.load(Ordering::Relaxed)
    }

    pub fn records_retired(&self) -> u64 {
        self.records_retired.load(Ordering::Relaxed)
    }

    /// Emit one summary line.
    pub fn report(&self, queued: usize, tracked: usize) {
        log::info!(
            "records: {}, dup states: {}, expanded: {}, queued children: {}, subsumed: {}, retired: {}, frontier: {}, tracked parents: {}",
            self.records(),
            self.dup_states(),
            self.parents_expanded(),
            self.children_queued(),
            self.subsumed(),
            self.records_retired(),
            queued,
            tracked
        );
    }
}
