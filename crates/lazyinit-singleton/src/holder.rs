//! Initialization-on-demand holder singleton.
//!
//! The instance sits in a `OnceLock` that nothing touches until
//! `instance()` is first called.  The standard library's run-once guarantee
//! provides at-most-once construction and publish-before-use visibility, so
//! this module contains no lock of its own.
//!
//! [`define_singleton!`](crate::define_singleton) declares the same kind of
//! holder as a named `LazyLock` static, for values that do not need the full
//! [`Singleton`] contract.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::info;

use crate::sequence::Sequence;
use crate::strategy::{Singleton, Strategy};

/// Singleton constructed on first call by `OnceLock`.
#[derive(Debug)]
pub struct HolderSingleton {
    serial: usize,
    sequence: Sequence,
}

static HOLDER: OnceLock<HolderSingleton> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl HolderSingleton {
    fn new() -> Self {
        let serial = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        info!(strategy = %Strategy::Holder, serial, "singleton constructed");
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

impl Singleton for HolderSingleton {
    type Handle = &'static HolderSingleton;
    const STRATEGY: Strategy = Strategy::Holder;

    fn instance() -> Self::Handle {
        HOLDER.get_or_init(HolderSingleton::new)
    }

    fn is_initialized() -> bool {
        HOLDER.get().is_some()
    }

    fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

/// Define a lazily-initialized singleton static `$name` of type `$ty`.
///
/// The initializer runs on first dereference, at most once, under the
/// standard library's `LazyLock` guarantee.
///
/// # Example
/// ```
/// use lazyinit_singleton::define_singleton;
///
/// struct Registry { names: Vec<&'static str> }
/// define_singleton!(REGISTRY, Registry, Registry { names: vec!["disk", "database"] });
///
/// assert_eq!(REGISTRY.names.len(), 2);
/// assert!(std::ptr::eq(&*REGISTRY, &*REGISTRY));
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialised global singleton.
        pub static $name: $crate::LazyLock<$ty> = $crate::LazyLock::new(|| $init);
    };
}
