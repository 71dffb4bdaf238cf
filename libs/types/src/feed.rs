//! Feed item model and wire envelopes
//!
//! A feed item is a reference to external market-related content: an
//! outbound link plus the metadata extracted at collection time (entities,
//! topics, labels, flags). The item list of a feed response is replaced
//! wholesale on every successful fetch and its server-determined order is
//! preserved.

use crate::ids::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptor of the source a reference was collected from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Display name of the source
    pub name: String,
    /// Source type (e.g. forum, aggregator)
    #[serde(rename = "type")]
    pub kind: String,
}

/// Named entities extracted from a reference at collection time
///
/// Every list is ordered and optional on the wire; an absent list is the
/// empty list. Unknown extra keys in the entity object are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBag {
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub tickers: Vec<String>,
    #[serde(default)]
    pub cryptocurrencies: Vec<String>,
    #[serde(default)]
    pub protocols: Vec<String>,
    #[serde(default)]
    pub exchanges: Vec<String>,
}

impl EntityBag {
    /// Whether no entities were extracted at all
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
            && self.tickers.is_empty()
            && self.cryptocurrencies.is_empty()
            && self.protocols.is_empty()
            && self.exchanges.is_empty()
    }
}

/// A single collected reference to external content
///
/// Metadata only: `external_url` is surfaced for the user to follow and is
/// never dereferenced by the index itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Unique within a single feed response
    pub id: ItemId,
    /// When the reference was collected
    pub captured_at: DateTime<Utc>,
    /// When the reference ages out of the index
    pub expires_at: DateTime<Utc>,
    /// Where the reference was collected from
    pub source: SourceRef,
    /// Outbound link to the referenced content
    pub external_url: String,
    /// Content label assigned at collection time
    pub content_label: String,
    /// Market category assigned at collection time
    pub market_category: String,
    /// Display prominence, opaque beyond rendering
    pub visibility_level: u32,
    /// Extracted named entities
    #[serde(default)]
    pub entities: EntityBag,
    /// Extracted topics, ordered
    #[serde(default)]
    pub topics: Vec<String>,
    /// Collection flags, ordered
    #[serde(default)]
    pub flags: Vec<String>,
}

/// Successful feed response envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

/// Error envelope for non-2xx feed responses
///
/// The backend may or may not include a structured message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ITEM: &str = r#"{
        "id": "ref-001",
        "captured_at": "2024-03-01T12:00:00Z",
        "expires_at": "2024-04-01T12:00:00Z",
        "source": {"name": "AlphaBoard", "type": "forum"},
        "external_url": "https://example.com/thread/42",
        "content_label": "Discussion",
        "market_category": "Crypto",
        "visibility_level": 2,
        "entities": {
            "companies": ["Acme Corp"],
            "tickers": ["ACME"],
            "cryptocurrencies": ["BTC"],
            "protocols": ["Lightning"],
            "exchanges": ["NYSE"]
        },
        "topics": ["halving", "etf"],
        "flags": ["rumor"]
    }"#;

    #[test]
    fn test_full_item_deserialization() {
        let item: FeedItem = serde_json::from_str(FULL_ITEM).unwrap();
        assert_eq!(item.id, ItemId::new("ref-001"));
        assert_eq!(item.source.name, "AlphaBoard");
        assert_eq!(item.source.kind, "forum");
        assert_eq!(item.visibility_level, 2);
        assert_eq!(item.entities.tickers, vec!["ACME"]);
        assert_eq!(item.topics, vec!["halving", "etf"]);
        assert_eq!(item.flags, vec!["rumor"]);
    }

    #[test]
    fn test_absent_lists_are_empty() {
        let json = r#"{
            "id": "ref-002",
            "captured_at": "2024-03-01T12:00:00Z",
            "expires_at": "2024-04-01T12:00:00Z",
            "source": {"name": "BetaWire", "type": "aggregator"},
            "external_url": "https://example.com/x",
            "content_label": "News",
            "market_category": "Equities",
            "visibility_level": 1
        }"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert!(item.entities.is_empty());
        assert!(item.topics.is_empty());
        assert!(item.flags.is_empty());
    }

    #[test]
    fn test_unknown_entity_keys_tolerated() {
        let json = r#"{
            "tickers": ["ACME"],
            "funds": ["Big Fund"],
            "regulators": ["SEC"]
        }"#;
        let bag: EntityBag = serde_json::from_str(json).unwrap();
        assert_eq!(bag.tickers, vec!["ACME"]);
        assert!(bag.companies.is_empty());
    }

    #[test]
    fn test_source_ref_type_field_name() {
        let source = SourceRef {
            name: "AlphaBoard".to_string(),
            kind: "forum".to_string(),
        };
        let json = serde_json::to_string(&source).unwrap();
        assert!(json.contains("\"type\":\"forum\""));
    }

    #[test]
    fn test_response_order_preserved() {
        let json = r#"{"items": []}"#;
        let empty: FeedResponse = serde_json::from_str(json).unwrap();
        assert!(empty.items.is_empty());

        let json = format!(r#"{{"items": [{FULL_ITEM}, {FULL_ITEM}]}}"#);
        let two: FeedResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(two.items.len(), 2);
        assert_eq!(two.items[0], two.items[1]);
    }

    #[test]
    fn test_missing_items_field_is_empty() {
        let response: FeedResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_error_body_with_and_without_message() {
        let with: ErrorBody = serde_json::from_str(r#"{"error": "rate limited"}"#).unwrap();
        assert_eq!(with.error.as_deref(), Some("rate limited"));

        let without: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(without.error, None);
    }
}
