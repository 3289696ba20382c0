//! # lazyinit-proxy
//!
//! A virtual proxy: [`ImageProxy`] implements the same [`Image`] capability
//! as the real images but only builds its backing image on the first call to
//! [`Image::display`].  The backing constructor is chosen by a
//! [`DelegationChoice`] fixed when the proxy is created, and the built image
//! is cached with the same once-only, release/acquire guarantee as the
//! double-checked singleton.
//!
//! ```
//! use lazyinit_proxy::{DelegationChoice, Image, ImageProxy, ProxyConfig};
//!
//! let proxy = ImageProxy::new("abc.txt", ProxyConfig::new(DelegationChoice::Database));
//! assert!(!proxy.is_loaded());
//! assert_eq!(proxy.display().unwrap(), "display image abc.txt");
//! assert_eq!(proxy.loaded_from(), Some(DelegationChoice::Database));
//!
//! let err = ImageProxy::from_token("abc.txt", "tape").unwrap_err();
//! assert!(err.is_configuration());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Delegation choice and proxy configuration.
pub mod config;

/// The `Image` capability and the two real images.
pub mod image;

/// Backing-image loaders.
pub mod loader;

/// The lazy image proxy.
pub mod proxy;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{DelegationChoice, ProxyConfig};
pub use image::{DatabaseImage, DiskImage, Image};
pub use loader::{ImageLoader, StubLoader};
pub use proxy::ImageProxy;
