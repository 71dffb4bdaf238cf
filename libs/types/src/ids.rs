//! Unique identifier types for index entities
//!
//! Item identifiers are issued by the collection backend and treated as
//! opaque strings here. They are unique within a single feed response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a feed item
///
/// Backend-issued and opaque; the browse core never synthesizes one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create from a backend-issued identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
