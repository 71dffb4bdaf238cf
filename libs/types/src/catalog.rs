//! Selectable vocabulary catalogs
//!
//! Two catalogs back the filter option lists: the source catalog (collected
//! sources with their types) and the tag catalog (content labels, market
//! categories, topics, flags). Each is loaded once per session and never
//! mutated afterwards. A failed load degrades to the empty catalog; the
//! feed view keeps working with empty option lists.

use crate::feed::SourceRef;
use serde::{Deserialize, Serialize};

/// Ordered catalog of collected sources
///
/// Doubles as the `/api/sources` wire envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCatalog {
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

impl SourceCatalog {
    /// The empty catalog (degraded-load form)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Source names in catalog order, for the source option list
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Ordered tag vocabularies
///
/// Doubles as the `/api/tags` wire envelope. Each list feeds one facet's
/// option list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCatalog {
    #[serde(default)]
    pub content_labels: Vec<String>,
    #[serde(default)]
    pub market_categories: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub flags: Vec<String>,
}

impl TagCatalog {
    /// The empty catalog (degraded-load form)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.content_labels.is_empty()
            && self.market_categories.is_empty()
            && self.topics.is_empty()
            && self.flags.is_empty()
    }
}
