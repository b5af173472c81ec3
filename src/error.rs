//! Error types.
//!
//! Only construction and resizing can fail: a table needs at least one
//! bucket because bucket indices are computed modulo the capacity. Lookups
//! and removals of absent keys are not errors; they report `None` or do
//! nothing.

use std::fmt;

/// Error returned when a table or ranker is configured with invalid
/// parameters (currently: a zero bucket count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    pub(crate) fn zero_capacity() -> Self {
        Self::new("capacity must be > 0")
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}
