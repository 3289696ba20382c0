//! # lazyinit
//!
//! Thread-safe lazy initialization: five singleton strategies and a lazily
//! materializing proxy, all built around one guarantee: a shared resource
//! is constructed at most once, and every thread sees it fully built.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `lazyinit-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use lazyinit::prelude::*;
//!
//! let a = DoubleCheckedSingleton::instance();
//! let b = DoubleCheckedSingleton::instance();
//! assert!(std::ptr::eq(a, b));
//!
//! let proxy = ImageProxy::from_token("abc.txt", "disk").unwrap();
//! assert_eq!(proxy.display().unwrap(), "display image abc.txt");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the once-only cells.
pub use lazyinit_core as core;

/// The five singleton strategies.
pub use lazyinit_singleton as singleton;

/// The lazy image proxy.
pub use lazyinit_proxy as proxy;

/// The items most callers need.
pub mod prelude {
    pub use lazyinit_core::{DoubleCheckedCell, Error, LockedCell, Result};
    pub use lazyinit_proxy::{
        DatabaseImage, DelegationChoice, DiskImage, Image, ImageLoader, ImageProxy, ProxyConfig,
        StubLoader,
    };
    pub use lazyinit_singleton::{
        same_instance, ConstantSingleton, DoubleCheckedSingleton, EagerSingleton,
        HolderSingleton, LockedSingleton, Singleton, Strategy,
    };
}
