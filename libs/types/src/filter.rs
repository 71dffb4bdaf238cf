//! Filter snapshot and canonical request descriptor
//!
//! A filter snapshot holds the free-text query and five selection facets.
//! Each facet is either the unconstrained sentinel or a vocabulary string;
//! the sentinel means the facet imposes no constraint and must never be
//! sent to the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel facet value meaning "no constraint"
pub const UNCONSTRAINED: &str = "All";

/// Whether a facet value is the unconstrained sentinel
pub fn is_unconstrained(value: &str) -> bool {
    value == UNCONSTRAINED
}

/// Snapshot of the current filter selection
///
/// Facet values are not validated against the loaded vocabularies: an
/// unrecognized value passes through and simply yields zero matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedFilters {
    /// Free-text metadata query
    pub query: String,
    /// Source name facet
    pub source: String,
    /// Market category facet
    pub market: String,
    /// Content label facet
    pub label: String,
    /// Collection flag facet
    pub flag: String,
    /// Topic facet
    pub topic: String,
}

impl FeedFilters {
    /// The five selection facets in canonical parameter order,
    /// as (parameter name, current value) pairs
    pub fn facets(&self) -> [(&'static str, &str); 5] {
        [
            ("source", &self.source),
            ("market", &self.market),
            ("label", &self.label),
            ("flag", &self.flag),
            ("topic", &self.topic),
        ]
    }

    /// Whether nothing is constrained (empty query, all facets at the sentinel)
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty()
            && self.facets().iter().all(|(_, v)| is_unconstrained(v))
    }
}

impl Default for FeedFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            source: UNCONSTRAINED.to_string(),
            market: UNCONSTRAINED.to_string(),
            label: UNCONSTRAINED.to_string(),
            flag: UNCONSTRAINED.to_string(),
            topic: UNCONSTRAINED.to_string(),
        }
    }
}

/// Canonical serialized form of a filter snapshot
///
/// Order-stable and byte-deterministic for equal snapshots, which makes it
/// usable as the identity key for fetch dedup and stale-response races.
/// The string is the exact query-string portion of the feed request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestDescriptor(String);

impl RequestDescriptor {
    /// Wrap an already-canonical query string
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Get the canonical query string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        let filters = FeedFilters::default();
        assert!(filters.is_unconstrained());
        assert!(filters.query.is_empty());
        assert_eq!(filters.source, UNCONSTRAINED);
    }

    #[test]
    fn test_facet_order_is_stable() {
        let filters = FeedFilters::default();
        let names: Vec<&str> = filters.facets().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["source", "market", "label", "flag", "topic"]);
    }

    #[test]
    fn test_whitespace_query_counts_as_unconstrained() {
        let filters = FeedFilters {
            query: "   ".to_string(),
            ..FeedFilters::default()
        };
        assert!(filters.is_unconstrained());
    }

    #[test]
    fn test_constrained_detection() {
        let filters = FeedFilters {
            market: "Crypto".to_string(),
            ..FeedFilters::default()
        };
        assert!(!filters.is_unconstrained());
    }

    #[test]
    fn test_descriptor_equality_is_identity() {
        let a = RequestDescriptor::new("q=acme&limit=50");
        let b = RequestDescriptor::new("q=acme&limit=50");
        let c = RequestDescriptor::new("limit=50");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "q=acme&limit=50");
    }
}
