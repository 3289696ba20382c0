//! Error types for lazyinit.
//!
//! A single `thiserror`-derived enum covers every failure the strategies can
//! report.  Configuration problems (an unknown delegation token) are kept
//! apart from failures of the backing constructor itself, so callers can tell
//! "this proxy can never work" from "this attempt did not work, retry later".

use thiserror::Error;

/// The top-level error type used throughout lazyinit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid configuration, e.g. an unrecognized delegation token.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The backing object could not be constructed.
    ///
    /// The owning cell stays empty and a later call may retry.
    #[error("construction failed: {0}")]
    Construction(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Return `true` for [`Error::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

/// Shorthand `Result` type used throughout lazyinit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lazyinit_core::{ensure, errors::Error};
/// fn named(name: &str) -> lazyinit_core::errors::Result<&str> {
///     ensure!(!name.is_empty(), "name must not be empty");
///     Ok(name)
/// }
/// assert!(named("abc.txt").is_ok());
/// assert_eq!(
///     named(""),
///     Err(Error::Precondition("name must not be empty".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use lazyinit_core::{fail, errors::Error};
/// fn always_err() -> lazyinit_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
