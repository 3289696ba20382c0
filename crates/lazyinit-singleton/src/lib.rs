//! # lazyinit-singleton
//!
//! Five interchangeable ways to own a single, process-wide instance.  Every
//! strategy implements [`Singleton`]: repeated calls to
//! [`Singleton::instance`] return the identical object, and when many threads
//! race on the first call exactly one instance is constructed.
//!
//! | strategy | type | construction | read cost |
//! |----------|------|--------------|-----------|
//! | eager | [`EagerSingleton`] | compile time | none |
//! | fully locked | [`LockedSingleton`] | first call | mutex on every call |
//! | double-checked | [`DoubleCheckedSingleton`] | first call | one acquire load |
//! | holder | [`HolderSingleton`] | first call | one acquire load |
//! | constant | [`ConstantSingleton`] | compile time | none |
//!
//! Each singleton owns a [`Sequence`], a process-wide id generator that
//! would hand out duplicate ids if two instances ever existed.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Single-variant enum singleton.
pub mod constant;

/// Double-checked-locking singleton.
pub mod double_checked;

/// Eagerly constructed singleton.
pub mod eager;

/// Initialization-on-demand holder singleton and `define_singleton!`.
pub mod holder;

/// Fully-locked lazy singleton.
pub mod locked;

/// The id generator each singleton owns.
pub mod sequence;

/// The `Singleton` contract and the `Strategy` enum.
pub mod strategy;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use constant::ConstantSingleton;
pub use double_checked::DoubleCheckedSingleton;
pub use eager::EagerSingleton;
pub use holder::HolderSingleton;
pub use locked::LockedSingleton;
pub use sequence::Sequence;
pub use strategy::{same_instance, Singleton, Strategy};

/// Re-export `LazyLock` as the container behind [`define_singleton!`].
pub use std::sync::LazyLock;
