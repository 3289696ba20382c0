//! Double-checked-locking singleton.
//!
//! Backed by [`DoubleCheckedCell`]: the first callers race for the lock and
//! exactly one constructs; once the instance is published with release
//! ordering, `instance()` is a single acquire load and never locks.

use std::sync::atomic::{AtomicUsize, Ordering};

use lazyinit_core::DoubleCheckedCell;
use tracing::info;

use crate::sequence::Sequence;
use crate::strategy::{Singleton, Strategy};

/// Singleton constructed on first call, read lock-free afterwards.
#[derive(Debug)]
pub struct DoubleCheckedSingleton {
    serial: usize,
    sequence: Sequence,
}

static CELL: DoubleCheckedCell<DoubleCheckedSingleton> = DoubleCheckedCell::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl DoubleCheckedSingleton {
    fn new() -> Self {
        let serial = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        info!(strategy = %Strategy::DoubleChecked, serial, "singleton constructed");
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

impl Singleton for DoubleCheckedSingleton {
    type Handle = &'static DoubleCheckedSingleton;
    const STRATEGY: Strategy = Strategy::DoubleChecked;

    fn instance() -> Self::Handle {
        CELL.get_or_init(DoubleCheckedSingleton::new)
    }

    fn is_initialized() -> bool {
        CELL.is_initialized()
    }

    fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}
