//! Principal identity type with `ST` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A principal — an account capable of invoking registry operations and
/// holding balance. Always prefixed with `ST` (c32 testnet convention).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// The standard prefix for all principal addresses.
    pub const PREFIX: &'static str = "ST";

    /// Create a new principal from a raw address string.
    ///
    /// # Panics
    /// Panics if the string does not start with `ST`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "principal must start with ST");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this principal is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
