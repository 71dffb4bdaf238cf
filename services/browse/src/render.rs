//! Feed presenter
//!
//! Stateless text rendering of the current fetch state. Items render as
//! short metadata summaries: source, label, category, capture time, a
//! bounded preview of entities/topics/flags, and the outbound link. The
//! link is surfaced as plain text and never dereferenced here.

use crate::fetch::FetchState;
use chrono::{DateTime, Utc};
use types::feed::FeedItem;

/// Shown while the latest request is outstanding
pub const LOADING_MESSAGE: &str = "Loading…";

/// Shown for a successful response with zero items
pub const NO_MATCHES_MESSAGE: &str = "No items match your filters.";

/// Max entries previewed per entity list
pub const ENTITY_PREVIEW: usize = 3;

/// Max entries previewed for topics and flags
pub const TAG_PREVIEW: usize = 4;

const HEADER_NOTICE: &str = "External sources • Unverified • Metadata-only";
const ITEM_NOTICE: &str = "External link only. Content not hosted. Not verified.";

/// Standing header for the browse view
pub fn render_header() -> String {
    format!("Latest indexed references\n{HEADER_NOTICE}")
}

/// Render the observable fetch state
///
/// Exactly one of: nothing (idle), the loading indicator, the single error
/// message, the no-match notice, or the item summaries in response order.
pub fn render_state(state: &FetchState) -> String {
    match state {
        FetchState::Idle => String::new(),
        FetchState::Loading => LOADING_MESSAGE.to_string(),
        FetchState::Error(message) => message.clone(),
        FetchState::Success(items) if items.is_empty() => NO_MATCHES_MESSAGE.to_string(),
        FetchState::Success(items) => items
            .iter()
            .map(render_item)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Render one item summary
pub fn render_item(item: &FeedItem) -> String {
    let mut lines = vec![
        format!(
            "{} • {}  {}",
            item.market_category,
            item.content_label,
            format_timestamp(&item.captured_at)
        ),
        format!(
            "Source: {} ({})  Visibility: {}",
            item.source.name, item.source.kind, item.visibility_level
        ),
    ];

    let mut tags = Vec::new();
    preview(&item.entities.companies, "Company", ENTITY_PREVIEW, &mut tags);
    preview(&item.entities.tickers, "Ticker", ENTITY_PREVIEW, &mut tags);
    preview(
        &item.entities.cryptocurrencies,
        "Crypto",
        ENTITY_PREVIEW,
        &mut tags,
    );
    preview(&item.topics, "Topic", TAG_PREVIEW, &mut tags);
    preview(&item.flags, "Flag", TAG_PREVIEW, &mut tags);
    if !tags.is_empty() {
        lines.push(tags.join(" "));
    }

    lines.push(format!("Open source: {}", item.external_url));
    lines.push(ITEM_NOTICE.to_string());
    lines.join("\n")
}

fn preview(values: &[String], label: &str, limit: usize, out: &mut Vec<String>) {
    for value in values.iter().take(limit) {
        out.push(format!("[{label}: {value}]"));
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::feed::{EntityBag, SourceRef};
    use types::ids::ItemId;

    fn item(id: &str) -> FeedItem {
        FeedItem {
            id: ItemId::new(id),
            captured_at: "2024-03-01T12:00:00Z".parse().unwrap(),
            expires_at: "2024-04-01T12:00:00Z".parse().unwrap(),
            source: SourceRef {
                name: "AlphaBoard".to_string(),
                kind: "forum".to_string(),
            },
            external_url: format!("https://example.com/{id}"),
            content_label: "Discussion".to_string(),
            market_category: "Crypto".to_string(),
            visibility_level: 2,
            entities: EntityBag::default(),
            topics: Vec::new(),
            flags: Vec::new(),
        }
    }

    #[test]
    fn test_loading_indicator() {
        assert_eq!(render_state(&FetchState::Loading), LOADING_MESSAGE);
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(render_state(&FetchState::Idle), "");
    }

    #[test]
    fn test_error_message_rendered_verbatim() {
        let state = FetchState::Error("HTTP 503".to_string());
        assert_eq!(render_state(&state), "HTTP 503");
    }

    #[test]
    fn test_empty_success_renders_no_match_notice() {
        assert_eq!(
            render_state(&FetchState::Success(vec![])),
            NO_MATCHES_MESSAGE
        );
    }

    #[test]
    fn test_ticker_preview_is_bounded() {
        let mut it = item("a");
        it.entities.tickers = vec![
            "ACME".to_string(),
            "ACM2".to_string(),
            "ACM3".to_string(),
            "ACM4".to_string(),
        ];
        let rendered = render_item(&it);

        assert_eq!(rendered.matches("[Ticker:").count(), 3);
        assert!(!rendered.contains("ACM4"));
        assert!(rendered.contains("Visibility: 2"));
    }

    #[test]
    fn test_topic_and_flag_preview_bounds() {
        let mut it = item("a");
        it.topics = (1..=6).map(|n| format!("topic{n}")).collect();
        it.flags = vec!["rumor".to_string()];
        let rendered = render_item(&it);

        assert_eq!(rendered.matches("[Topic:").count(), 4);
        assert!(!rendered.contains("topic5"));
        assert!(rendered.contains("[Flag: rumor]"));
    }

    #[test]
    fn test_item_summary_fields() {
        let rendered = render_item(&item("ref-42"));
        assert!(rendered.contains("Crypto • Discussion"));
        assert!(rendered.contains("2024-03-01 12:00 UTC"));
        assert!(rendered.contains("Source: AlphaBoard (forum)"));
        assert!(rendered.contains("Open source: https://example.com/ref-42"));
        assert!(rendered.contains("External link only. Content not hosted. Not verified."));
    }

    #[test]
    fn test_items_render_in_response_order() {
        let state = FetchState::Success(vec![item("second"), item("first")]);
        let rendered = render_state(&state);
        let second_pos = rendered.find("example.com/second").unwrap();
        let first_pos = rendered.find("example.com/first").unwrap();
        assert!(second_pos < first_pos);
    }

    #[test]
    fn test_header_carries_notices() {
        let header = render_header();
        assert!(header.contains("Latest indexed references"));
        assert!(header.contains("External sources • Unverified • Metadata-only"));
    }
}
