//! # lazyinit-core
//!
//! Core types shared by every other crate in the workspace: the error
//! hierarchy with its `ensure!` / `fail!` macros, and the two reusable
//! once-only cells that back the lazy strategies.
//!
//! * [`LockedCell`] takes its lock on every access.
//! * [`DoubleCheckedCell`] takes its lock only while the value is absent and
//!   publishes the value with release/acquire ordering.

#![warn(missing_docs)]
#![deny(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Once-only initialization cells.
pub mod cell;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use cell::{DoubleCheckedCell, LockedCell};
pub use errors::{Error, Result};
