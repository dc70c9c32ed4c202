//! Immutable candidate input sequences and their canonical keys.

use crate::pulse::{alphabet, Pulse};
use crate::worklist::{ScoredSeq, SCORE_MAX};

use std::fmt;
use std::sync::Arc;

/// An ordered, immutable list of pulses.
///
/// Sequences are shared between the worklist and the lineage map, so they are
/// backed by an `Arc` slice. [`InputSequence::append`] allocates a fresh
/// backing store and never touches the receiver; a sequence already handed
/// out stays stable for the life of the campaign.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSequence {
    pulses: Arc<[Pulse]>,
}

impl InputSequence {
    pub fn empty() -> Self {
        Self {
            pulses: Vec::new().into(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    #[inline]
    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    /// Return a new sequence one pulse longer; `self` is not modified.
    pub fn append(&self, pulse: Pulse) -> Self {
        let mut pulses = Vec::with_capacity(self.pulses.len() + 1);
        pulses.extend_from_slice(&self.pulses);
        pulses.push(pulse);
        Self {
            pulses: pulses.into(),
        }
    }

    /// Canonical lossless encoding, one character per pulse. Two sequences
    /// are equal iff their keys are equal.
    pub fn key(&self) -> String {
        self.pulses.iter().map(|p| p.encode()).collect()
    }

    /// Key of the sequence this one was appended from: the canonical key
    /// with its last unit stripped.
    pub fn parent_key(&self) -> String {
        let mut key = self.key();
        key.pop();
        key
    }
}

impl fmt::Display for InputSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.pulses.iter() {
            write!(f, "{}", p.encode())?;
        }
        Ok(())
    }
}

/// Materialize the initial search frontier: every one of the
/// `(buttons + 1)^len` sequences of exactly `len` pulses, each at maximum
/// score so the whole frontier is tried before any derived sequence.
pub fn enumerate_all(buttons: usize, len: usize) -> Vec<ScoredSeq> {
    let pulses = alphabet(buttons);
    let mut frontier = vec![InputSequence::empty()];
    for _ in 0..len {
        let mut next = Vec::with_capacity(frontier.len() * pulses.len());
        for seq in &frontier {
            for &p in &pulses {
                next.push(seq.append(p));
            }
        }
        frontier = next;
    }
    frontier
        .into_iter()
        .map(|seq| ScoredSeq::new(seq, SCORE_MAX))
        .collect()
}
