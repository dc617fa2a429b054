//! Identifier type for marketplace listings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, caller-chosen identifier of an agent listing (e.g.
/// `code-review-agent-v2`).
///
/// The identifier is the lookup key for both the listing and its review
/// history. It is stored exactly as given, so blank or padded values are
/// distinct identifiers like any other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an agent identifier from its raw value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
