//! Generator facade consumed by the execution harness.

use crate::config::{Config, ConfigError};
use crate::cover::Coverage;
use crate::dedup::StateDedup;
use crate::lineage::{LineageTracker, Verdict};
use crate::seq::{enumerate_all, InputSequence};
use crate::stats::Stats;
use crate::worklist::Worklist;

use std::sync::Mutex;

/// Concurrent, coverage-guided input-sequence generator.
///
/// Worker threads share one `Generator` (typically behind an `Arc`) and loop
/// [`Generator::has_more`]/[`Generator::generate`] to obtain work and
/// [`Generator::record`] to report results. All three calls are safe under
/// arbitrary interleaving and none of them blocks waiting for new work; the
/// harness polls.
#[derive(Debug)]
pub struct Generator {
    buttons: usize,
    /// Single-slot lookahead shared by `has_more` and `generate`, so the two
    /// stay mutually exclusive and agree on what comes next.
    slot: Mutex<Option<InputSequence>>,
    worklist: Worklist,
    lineage: LineageTracker,
    seen: StateDedup,
    stats: Stats,
}

impl Generator {
    /// Build a generator and seed its frontier with every sequence of length
    /// `config.initial_len` at maximum score.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.check()?;
        let worklist = Worklist::new();
        let frontier = enumerate_all(config.buttons, config.initial_len);
        log::info!(
            "seeded frontier with {} sequences of length {}",
            frontier.len(),
            config.initial_len
        );
        worklist.extend(frontier);
        Ok(Self {
            buttons: config.buttons,
            slot: Mutex::new(None),
            worklist,
            lineage: LineageTracker::new(),
            seen: StateDedup::new(),
            stats: Stats::new(),
        })
    }

    /// Report whether a subsequent [`Generator::generate`] call is
    /// guaranteed to return a sequence, atomically with respect to other
    /// `has_more`/`generate` calls.
    pub fn has_more(&self) -> bool {
        let mut slot = self.slot.lock().unwrap();
        if slot.is_none() {
            *slot = self.worklist.pop().map(|s| s.seq);
        }
        slot.is_some()
    }

    /// Take the highest-ranked candidate, or `None` if the frontier is
    /// currently exhausted.
    pub fn generate(&self) -> Option<InputSequence> {
        let mut slot = self.slot.lock().unwrap();
        if slot.is_none() {
            *slot = self.worklist.pop().map(|s| s.seq);
        }
        slot.take()
    }

    /// Feed back the result of executing `seq`: the instruction coverage it
    /// reached and the terminal memory snapshot it left behind. Repeated
    /// terminal states are silently dropped; otherwise the lineage tracker
    /// decides whether `seq` is expanded into longer candidates.
    pub fn record(&self, seq: &InputSequence, cover: Coverage, terminal_state: &[u8]) {
        self.stats.inc_records();
        if !self.seen.insert(terminal_state) {
            self.stats.inc_dup_states();
            return;
        }

        let outcome = self.lineage.record(seq, cover, &self.worklist, self.buttons);
        match outcome.verdict {
            Verdict::FreshParent { children } | Verdict::Gained { children, .. } => {
                self.stats.inc_parents_expanded();
                self.stats.add_children_queued(children as u64);
            }
            Verdict::Subsumed => self.stats.inc_subsumed(),
        }
        if outcome.retired_parent {
            self.stats.inc_records_retired();
        }
    }

    /// Sequences currently queued, not counting the lookahead slot.
    pub fn queued(&self) -> usize {
        self.worklist.len()
    }

    /// Parents with children still outstanding.
    pub fn tracked_parents(&self) -> usize {
        self.lineage.len()
    }

    /// Distinct terminal states observed so far.
    pub fn seen_states(&self) -> usize {
        self.seen.len()
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Log one stats summary line.
    pub fn report(&self) {
        self.stats.report(self.queued(), self.tracked_parents());
    }
}
