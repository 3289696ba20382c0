//! Delegation choice and proxy configuration.
//!
//! The backing loader is picked by a closed set of tokens, `disk` and
//! `database`.  Anything else is rejected with [`Error::Configuration`] at
//! the moment the configuration is built; there is no fallback loader.

use std::fmt;
use std::str::FromStr;

use lazyinit_core::{Error, Result};

/// Which constructor builds a proxy's backing image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum DelegationChoice {
    /// Load through the disk loader.
    Disk,
    /// Load through the database loader.
    Database,
}

impl DelegationChoice {
    /// Every recognized choice.
    pub const ALL: [DelegationChoice; 2] = [DelegationChoice::Disk, DelegationChoice::Database];

    /// The configuration token for this choice.
    pub fn as_str(self) -> &'static str {
        match self {
            DelegationChoice::Disk => "disk",
            DelegationChoice::Database => "database",
        }
    }
}

impl fmt::Display for DelegationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DelegationChoice {
    type Err = Error;

    /// Parse a token, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        DelegationChoice::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "unknown image source {token:?}, expected one of \"disk\", \"database\""
                ))
            })
    }
}

impl TryFrom<String> for DelegationChoice {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Immutable configuration of an [`ImageProxy`](crate::ImageProxy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct ProxyConfig {
    source: DelegationChoice,
}

impl ProxyConfig {
    /// Configuration loading from `source`.
    pub fn new(source: DelegationChoice) -> Self {
        Self { source }
    }

    /// Build a configuration from a raw token.
    ///
    /// Fails with [`Error::Configuration`] for an unrecognized token.
    pub fn from_token(token: &str) -> Result<Self> {
        Ok(Self::new(token.parse()?))
    }

    /// The configured delegation choice.
    pub fn source(&self) -> DelegationChoice {
        self.source
    }
}

impl From<DelegationChoice> for ProxyConfig {
    fn from(source: DelegationChoice) -> Self {
        Self::new(source)
    }
}
