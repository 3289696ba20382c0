//! Eager singleton.
//!
//! The instance is a `static` built by a `const fn`, so it exists before
//! `main` runs and before any caller asks for it.  There is nothing to
//! synchronize and nothing to fail; the cost is paid even if the instance is
//! never used.

use crate::sequence::Sequence;
use crate::strategy::{Singleton, Strategy};

/// Singleton constructed at compile time.
#[derive(Debug)]
pub struct EagerSingleton {
    sequence: Sequence,
}

static INSTANCE: EagerSingleton = EagerSingleton::new();

impl EagerSingleton {
    const fn new() -> Self {
        Self {
            sequence: Sequence::new(),
        }
    }
}

impl Singleton for EagerSingleton {
    type Handle = &'static EagerSingleton;
    const STRATEGY: Strategy = Strategy::Eager;

    fn instance() -> Self::Handle {
        &INSTANCE
    }

    fn is_initialized() -> bool {
        true
    }

    fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}
