//! Canonical request derivation
//!
//! Pure mapping from a filter snapshot to the request descriptor sent to
//! the feed endpoint. The encoding is order-stable and deterministic so
//! that equal snapshots always produce byte-identical descriptors; the
//! fetcher relies on that identity for dedup and stale-response handling.

use types::filter::{is_unconstrained, FeedFilters, RequestDescriptor};
use url::form_urlencoded;

/// Fixed feed page size, always sent
pub const PAGE_SIZE: u32 = 50;

/// Derive the canonical descriptor for a snapshot
///
/// Rules: trim the free-text query and omit it when empty; omit every
/// facet at the unconstrained sentinel; always append `limit`.
/// Parameter order is fixed: `q`, facets in declaration order, `limit`.
pub fn build_descriptor(filters: &FeedFilters) -> RequestDescriptor {
    let mut encoder = form_urlencoded::Serializer::new(String::new());

    let query = filters.query.trim();
    if !query.is_empty() {
        encoder.append_pair("q", query);
    }
    for (name, value) in filters.facets() {
        if !is_unconstrained(value) {
            encoder.append_pair(name, value);
        }
    }
    encoder.append_pair("limit", &PAGE_SIZE.to_string());

    RequestDescriptor::new(encoder.finish())
}

/// Decode a descriptor back into the snapshot it constrains
///
/// Omitted parameters come back as the unconstrained default; `limit` and
/// unknown parameters are ignored. Exists for diagnostics and to keep the
/// encoding honest: re-encoding a decoded descriptor reproduces it.
pub fn decode_descriptor(descriptor: &RequestDescriptor) -> FeedFilters {
    let mut filters = FeedFilters::default();
    for (key, value) in form_urlencoded::parse(descriptor.as_str().as_bytes()) {
        match key.as_ref() {
            "q" => filters.query = value.into_owned(),
            "source" => filters.source = value.into_owned(),
            "market" => filters.market = value.into_owned(),
            "label" => filters.label = value.into_owned(),
            "flag" => filters.flag = value.into_owned(),
            "topic" => filters.topic = value.into_owned(),
            _ => {}
        }
    }
    filters
}
