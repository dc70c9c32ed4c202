//! Terminal-state deduplication.

use crate::HashSet;

use std::sync::RwLock;

/// Set of all terminal memory snapshots observed so far, compared by value.
///
/// Read-mostly: membership is checked under the read lock and the write lock
/// is taken only on first sighting. The lock is distinct from the worklist's
/// so dedup contention stays off the frontier path. The set only grows for
/// the life of the process.
#[derive(Debug, Default)]
pub struct StateDedup {
    seen: RwLock<HashSet<Box<[u8]>>>,
}

impl StateDedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether `state` had not been recorded before, recording it if
    /// so. Calling twice with the same bytes reports true then false.
    pub fn insert(&self, state: &[u8]) -> bool {
        {
            let seen = self.seen.read().unwrap();
            if seen.contains(state) {
                return false;
            }
        }
        let mut seen = self.seen.write().unwrap();
        seen.insert(state.into())
    }

    /// Distinct states recorded so far.
    pub fn len(&self) -> usize {
        let seen = self.seen.read().unwrap();
        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_true_exactly_once() {
        let dedup = StateDedup::new();
        assert!(dedup.insert(b"state-a"));
        assert!(!dedup.insert(b"state-a"));
        assert!(dedup.insert(b"state-b"));
        assert!(!dedup.insert(b"state-b"));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn compares_by_content() {
        let dedup = StateDedup::new();
        let a = vec![0u8, 1, 2];
        let b = vec![0u8, 1, 2];
        assert!(dedup.insert(&a));
        assert!(!dedup.insert(&b));
    }
}
