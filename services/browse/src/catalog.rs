//! One-shot vocabulary catalog loads
//!
//! Both catalogs load once at startup, independently of the feed pipeline.
//! Any failure degrades to the empty catalog: the option lists render
//! empty and the feed view keeps working. Nothing here is surfaced to the
//! user as an error.

use crate::client::FeedClient;
use tracing::{info, warn};
use types::catalog::{SourceCatalog, TagCatalog};

/// Load the source vocabulary, absorbing any failure
pub async fn load_sources(client: &FeedClient) -> SourceCatalog {
    match client.fetch_sources().await {
        Ok(catalog) => {
            info!(sources = catalog.len(), "Source catalog loaded");
            catalog
        }
        Err(err) => {
            warn!(error = %err, "Source catalog unavailable; options degrade to empty");
            SourceCatalog::empty()
        }
    }
}

/// Load the tag vocabularies, absorbing any failure
pub async fn load_tags(client: &FeedClient) -> TagCatalog {
    match client.fetch_tags().await {
        Ok(catalog) => {
            info!(
                content_labels = catalog.content_labels.len(),
                market_categories = catalog.market_categories.len(),
                topics = catalog.topics.len(),
                flags = catalog.flags.len(),
                "Tag catalog loaded"
            );
            catalog
        }
        Err(err) => {
            warn!(error = %err, "Tag catalog unavailable; options degrade to empty");
            TagCatalog::empty()
        }
    }
}

/// Load both catalogs concurrently
///
/// The two loads have no ordering relationship to each other or to feed
/// fetches.
pub async fn load_catalogs(client: &FeedClient) -> (SourceCatalog, TagCatalog) {
    tokio::join!(load_sources(client), load_tags(client))
}
