//! Constant (enum) singleton.
//!
//! A closed enum with one variant has exactly one value, fixed at compile
//! time.  There is no constructor to call, and any way of producing a
//! `ConstantSingleton` (naming the variant, `Default`, copying) yields that
//! same value.

use std::fmt;

use crate::sequence::Sequence;
use crate::strategy::{Singleton, Strategy};

/// Singleton expressed as the only variant of an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConstantSingleton {
    /// The instance.
    #[default]
    Instance,
}

static INSTANCE: ConstantSingleton = ConstantSingleton::Instance;
static SEQUENCE: Sequence = Sequence::new();

impl ConstantSingleton {
    /// Run the singleton's operation and describe what happened.
    pub fn perform(&self) -> String {
        format!("{} performed task #{}", self, self.next_id())
    }
}

impl fmt::Display for ConstantSingleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantSingleton::Instance => f.write_str("ConstantSingleton::Instance"),
        }
    }
}

impl Singleton for ConstantSingleton {
    type Handle = &'static ConstantSingleton;
    const STRATEGY: Strategy = Strategy::Constant;

    fn instance() -> Self::Handle {
        &INSTANCE
    }

    fn is_initialized() -> bool {
        true
    }

    fn sequence(&self) -> &Sequence {
        match self {
            ConstantSingleton::Instance => &SEQUENCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_yields_the_same_value() {
        assert_eq!(ConstantSingleton::default(), ConstantSingleton::Instance);
        assert_eq!(*ConstantSingleton::instance(), ConstantSingleton::Instance);
        let copied = *ConstantSingleton::instance();
        assert!(std::ptr::eq(copied.sequence(), ConstantSingleton::Instance.sequence()));
    }

    #[test]
    fn perform_issues_fresh_ids() {
        let first = ConstantSingleton::Instance.perform();
        let second = ConstantSingleton::Instance.perform();
        assert!(first.starts_with("ConstantSingleton::Instance performed task #"));
        assert_ne!(first, second);
    }
}
