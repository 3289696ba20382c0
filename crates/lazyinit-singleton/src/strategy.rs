//! The contract shared by every singleton strategy.

use std::fmt;
use std::ops::Deref;

use crate::sequence::Sequence;

/// How a [`Singleton`] creates and publishes its instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Constructed before any caller asks for it.
    Eager,
    /// Constructed on first call; every call takes the lock.
    Locked,
    /// Constructed on first call; the lock is skipped once published.
    DoubleChecked,
    /// Constructed on first call by a run-once primitive; no lock in user
    /// code.
    Holder,
    /// The only variant of a closed enum.
    Constant,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Eager,
        Strategy::Locked,
        Strategy::DoubleChecked,
        Strategy::Holder,
        Strategy::Constant,
    ];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Eager => "eager",
            Strategy::Locked => "locked",
            Strategy::DoubleChecked => "double-checked",
            Strategy::Holder => "holder",
            Strategy::Constant => "constant",
        }
    }

    /// Return `true` if the instance is only built on first access.
    pub fn is_lazy(self) -> bool {
        matches!(
            self,
            Strategy::Locked | Strategy::DoubleChecked | Strategy::Holder
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type with exactly one process-wide instance.
///
/// Implementors keep their constructor private; `instance()` is the only way
/// to reach the value.
pub trait Singleton: Send + Sync + Sized + 'static {
    /// What `instance()` hands out: `&'static Self` for most strategies,
    /// `Arc<Self>` for the fully-locked one.
    type Handle: Deref<Target = Self> + Clone + Send;

    /// The strategy this type uses.
    const STRATEGY: Strategy;

    /// Return the instance, constructing it first if the strategy is lazy.
    fn instance() -> Self::Handle;

    /// Return `true` once the instance exists.  Never constructs it.
    fn is_initialized() -> bool;

    /// The id generator owned by the instance.
    fn sequence(&self) -> &Sequence;

    /// Issue the next process-wide id.
    fn next_id(&self) -> u64 {
        self.sequence().next_id()
    }
}

/// Return `true` if both handles point at the same object.
pub fn same_instance<S: Singleton>(a: &S::Handle, b: &S::Handle) -> bool {
    std::ptr::eq(&**a, &**b)
}
