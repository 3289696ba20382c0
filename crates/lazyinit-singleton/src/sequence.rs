//! Monotonic id generator.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A lock-free source of unique, strictly increasing ids starting at 1.
///
/// Uniqueness only holds per `Sequence`, which is why it lives inside a
/// singleton.
pub struct Sequence {
    next: AtomicU64,
}

impl Sequence {
    /// Create a sequence whose first id is 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Issue the next id.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("issued", &self.issued())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn ids_start_at_one() {
        let seq = Sequence::new();
        assert_eq!(seq.issued(), 0);
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.issued(), 2);
    }

    #[test]
    fn concurrent_ids_are_unique() {
        let seq = Sequence::new();
        let ids: Vec<u64> = thread::scope(|s| {
            let workers: Vec<_> = (0..8)
                .map(|_| s.spawn(|| (0..500).map(|_| seq.next_id()).collect::<Vec<_>>()))
                .collect();
            workers
                .into_iter()
                .flat_map(|w| w.join().unwrap())
                .collect()
        });
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 4000);
        assert_eq!(seq.issued(), 4000);
    }
}
