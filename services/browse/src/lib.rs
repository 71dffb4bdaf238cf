//! Browse Service
//!
//! Read-only, filterable browse view over the market reference index.
//! Consumes the collection backend's HTTP API and produces:
//! - A filter state store publishing snapshots to subscribers
//! - Canonical request descriptors derived from each snapshot
//! - A generation-gated feed fetcher that suppresses stale responses
//! - One-shot vocabulary catalog loads for the filter option lists
//! - Text summaries of the current feed state
//!
//! # Architecture
//!
//! ```text
//! Filter commands
//!        │
//!   ┌────▼──────┐
//!   │FilterState│  ← publishes snapshots on every change
//!   └────┬──────┘
//!        │
//!   ┌────▼──────┐
//!   │  query    │  ← snapshot → canonical RequestDescriptor
//!   └────┬──────┘
//!        │
//!   ┌────▼──────┐     ┌────────┐
//!   │FeedFetcher├─────►backend │  GET /api/feed?…&limit=50
//!   └────┬──────┘     └────────┘
//!        │  (stale generations discarded on arrival)
//!   ┌────▼──────┐
//!   │  render   │  ← Loading / Error / Success summaries
//!   └───────────┘
//! ```
//!
//! Catalog loads (`/api/sources`, `/api/tags`) run independently of the
//! feed pipeline and degrade to empty vocabularies on failure.

pub mod catalog;
pub mod client;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod query;
pub mod render;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
