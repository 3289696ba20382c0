//! Fully-locked lazy singleton.
//!
//! Every call to `instance()` takes the same mutex before checking whether
//! the instance exists.  Correct under any amount of concurrency, but every
//! read after the first still serializes on the lock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lazyinit_core::LockedCell;
use tracing::info;

use crate::sequence::Sequence;
use crate::strategy::{Singleton, Strategy};

/// Singleton constructed on first call under a lock taken on every call.
#[derive(Debug)]
pub struct LockedSingleton {
    serial: usize,
    sequence: Sequence,
}

static CELL: LockedCell<LockedSingleton> = LockedCell::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl LockedSingleton {
    fn new() -> Self {
        let serial = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        info!(strategy = %Strategy::Locked, serial, "singleton constructed");
        Self {
            serial,
            sequence: Sequence::new(),
        }
    }

    /// How many times the constructor has run in this process.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    /// Construction serial of this instance (always 1).
    pub fn serial(&self) -> usize {
        self.serial
    }
}

impl Singleton for LockedSingleton {
    type Handle = Arc<LockedSingleton>;
    const STRATEGY: Strategy = Strategy::Locked;

    fn instance() -> Self::Handle {
        CELL.get_or_init(LockedSingleton::new)
    }

    fn is_initialized() -> bool {
        CELL.is_initialized()
    }

    fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_share_one_instance() {
        let a = LockedSingleton::instance();
        let b = LockedSingleton::instance();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.serial(), 1);
        assert_eq!(LockedSingleton::constructions(), 1);
        assert!(LockedSingleton::is_initialized());
    }
}
