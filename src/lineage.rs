//! Parent/child lineage tracking and coverage-bonus scoring.

use crate::cover::Coverage;
use crate::pulse::alphabet;
use crate::seq::InputSequence;
use crate::worklist::{ScoredSeq, Worklist, SCORE_MAX};
use crate::HashMap;

use std::sync::Mutex;

use rand::prelude::*;

/// Coverage snapshot of a tracked parent plus the number of its spawned
/// children that have not reported back yet.
///
/// A record lives exactly as long as its counter is non-zero; the `record`
/// path that decrements it to zero also deletes it.
#[derive(Debug)]
struct CoverageRecord {
    cover: Coverage,
    pending_children: usize,
}

/// What the tracker decided about a reported sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No live record for the parent (first generation, or the parent was
    /// already collected): expanded unconditionally at maximum score.
    FreshParent { children: usize },
    /// Exposed coverage beyond the parent: tracked and expanded.
    Gained { bonus: u64, score: u64, children: usize },
    /// The parent's coverage subsumes this sequence: dropped.
    Subsumed,
}

/// Result of one `record` call against the lineage map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOutcome {
    pub verdict: Verdict,
    /// The originating parent's last outstanding child reported, so its
    /// record was deleted.
    pub retired_parent: bool,
}

/// Lineage map guarded by a single mutex.
///
/// The whole decide/expand/decrement path runs under one critical section so
/// two concurrent reports for children of the same parent can never observe
/// the same pre-decrement counter value.
#[derive(Debug, Default)]
pub struct LineageTracker {
    records: Mutex<HashMap<String, CoverageRecord>>,
}

impl LineageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parents with children still outstanding.
    pub fn len(&self) -> usize {
        let records = self.records.lock().unwrap();
        records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Score `seq` against its parent's recorded coverage and expand it into
    /// the worklist if it earned it. `buttons` is the alphabet size.
    pub fn record(
        &self,
        seq: &InputSequence,
        cover: Coverage,
        worklist: &Worklist,
        buttons: usize,
    ) -> RecordOutcome {
        let parent_key = seq.parent_key();
        let mut records = self.records.lock().unwrap();

        let bonus = records
            .get(&parent_key)
            .map(|rec| cover.bonus_over(&rec.cover));

        match bonus {
            None => {
                // Nothing to compare against: behave as a fresh parent.
                let children = expand(seq, SCORE_MAX, worklist, buttons);
                records.insert(
                    seq.key(),
                    CoverageRecord {
                        cover,
                        pending_children: children,
                    },
                );
                RecordOutcome {
                    verdict: Verdict::FreshParent { children },
                    retired_parent: false,
                }
            }
            Some(bonus) => {
                let verdict = if bonus > 0 {
                    let len = seq.len() as u64;
                    let score = cover.cardinality() + bonus * len * len;
                    let children = expand(seq, score, worklist, buttons);
                    log::debug!(
                        "tracked {}: bonus {}, score {}, children {}",
                        seq,
                        bonus,
                        score,
                        children
                    );
                    records.insert(
                        seq.key(),
                        CoverageRecord {
                            cover,
                            pending_children: children,
                        },
                    );
                    Verdict::Gained {
                        bonus,
                        score,
                        children,
                    }
                } else {
                    Verdict::Subsumed
                };

                // This child has reported; retire the parent once all of its
                // children have.
                let mut retired_parent = false;
                if let Some(rec) = records.get_mut(&parent_key) {
                    debug_assert!(rec.pending_children > 0);
                    rec.pending_children -= 1;
                    if rec.pending_children == 0 {
                        records.remove(&parent_key);
                        retired_parent = true;
                        log::debug!("retired lineage record \"{}\"", parent_key);
                    }
                }
                RecordOutcome {
                    verdict,
                    retired_parent,
                }
            }
        }
    }

    #[cfg(test)]
    fn contains(&self, key: &str) -> bool {
        let records = self.records.lock().unwrap();
        records.contains_key(key)
    }
}

/// Enqueue every one-pulse extension of `seq` at `score`: the button presses
/// in uniformly shuffled order, then the empty pulse. Returns the number of
/// children enqueued.
fn expand(seq: &InputSequence, score: u64, worklist: &Worklist, buttons: usize) -> usize {
    let mut pulses = alphabet(buttons);
    pulses[..buttons].shuffle(&mut thread_rng());
    let n = pulses.len();
    for pulse in pulses {
        worklist.push(ScoredSeq::new(seq.append(pulse), score));
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pulse::{Button, Pulse};

    fn seq(encoded_len: usize) -> InputSequence {
        let mut s = InputSequence::empty();
        for _ in 0..encoded_len {
            s = s.append(Pulse::Press(Button(0)));
        }
        s
    }

    #[test]
    fn fresh_parent_expands_unconditionally() {
        let tracker = LineageTracker::new();
        let wl = Worklist::new();
        let s = seq(1);

        let outcome = tracker.record(&s, Coverage::from_hits(16, vec![0]), &wl, 2);
        assert_eq!(
            outcome.verdict,
            Verdict::FreshParent { children: 3 }
        );
        assert!(!outcome.retired_parent);
        assert_eq!(wl.len(), 3);
        assert!(tracker.contains(&s.key()));
        // All children enter at maximum score.
        while let Some(child) = wl.pop() {
            assert_eq!(child.score, SCORE_MAX);
            assert_eq!(child.seq.parent_key(), s.key());
        }
    }

    #[test]
    fn coverage_gain_scores_and_expands() {
        let tracker = LineageTracker::new();
        let wl = Worklist::new();
        let parent = seq(1);
        tracker.record(&parent, Coverage::from_hits(16, vec![0, 1]), &wl, 1);
        while wl.pop().is_some() {}

        // Child covers one bit beyond the parent: bonus 1, len 2.
        let child = parent.append(Pulse::NoInput);
        let outcome = tracker.record(&child, Coverage::from_hits(16, vec![0, 1, 2]), &wl, 1);
        assert_eq!(
            outcome.verdict,
            Verdict::Gained {
                bonus: 1,
                score: 7, // cardinality 3 + bonus 1 * len 2 squared
                children: 2
            }
        );
        assert!(tracker.contains(&child.key()));
        let queued = wl.pop().unwrap();
        assert_eq!(queued.score, 7);
    }

    #[test]
    fn subsumed_child_is_dropped() {
        let tracker = LineageTracker::new();
        let wl = Worklist::new();
        let parent = seq(1);
        tracker.record(&parent, Coverage::from_hits(16, vec![0, 1]), &wl, 1);
        while wl.pop().is_some() {}

        let child = parent.append(Pulse::NoInput);
        let outcome = tracker.record(&child, Coverage::from_hits(16, vec![0]), &wl, 1);
        assert_eq!(outcome.verdict, Verdict::Subsumed);
        assert!(wl.is_empty());
        assert!(!tracker.contains(&child.key()));
    }

    #[test]
    fn parent_retired_after_last_child_reports() {
        let tracker = LineageTracker::new();
        let wl = Worklist::new();
        let parent = seq(1);
        // One button: the parent spawns two children.
        tracker.record(&parent, Coverage::from_hits(16, vec![0, 1]), &wl, 1);
        assert!(tracker.contains(&parent.key()));

        let sub = Coverage::from_hits(16, vec![0]);
        let first = tracker.record(&parent.append(Pulse::Press(Button(0))), sub.clone(), &wl, 1);
        assert!(!first.retired_parent);
        assert!(tracker.contains(&parent.key()));

        let last = tracker.record(&parent.append(Pulse::NoInput), sub, &wl, 1);
        assert!(last.retired_parent);
        assert!(!tracker.contains(&parent.key()));
        assert!(tracker.is_empty());
    }
}
