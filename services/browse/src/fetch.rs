//! Feed fetch state machine with stale-response suppression
//!
//! Every new descriptor issues a request tagged with a monotonically
//! increasing generation. A completion is applied only when its generation
//! is still the latest issued; anything older is discarded on arrival, so
//! a slow earlier request can never overwrite a newer selection's result.
//! Cancellation is logical only: in-flight requests are left to finish.

use crate::client::FeedClient;
use crate::error::FetchError;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use types::feed::FeedItem;
use types::filter::RequestDescriptor;

/// Observable fetch state, consumed by the presenter
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No request issued yet
    Idle,
    /// The latest generation is outstanding
    Loading,
    /// The latest generation completed with items (possibly zero)
    Success(Vec<FeedItem>),
    /// The latest generation failed; one message, already human-readable
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// State name for logging
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "Idle",
            FetchState::Loading => "Loading",
            FetchState::Success(_) => "Success",
            FetchState::Error(_) => "Error",
        }
    }
}

/// Lifetime counters for the fetch pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Requests issued (generations started)
    pub requests_issued: u64,
    /// Results applied (latest-generation completions)
    pub results_applied: u64,
    /// Stale completions discarded on arrival
    pub stale_discarded: u64,
    /// Begins skipped because the descriptor was unchanged
    pub duplicates_skipped: u64,
}

/// Generation-gated request sequencer
///
/// Synchronous core of the fetcher: `begin` issues generations, `complete`
/// applies or discards results. No I/O, so races are testable by driving
/// the two halves directly.
pub struct RequestSequencer {
    generation: u64,
    current: Option<RequestDescriptor>,
    state: FetchState,
    stats: FetchStats,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self {
            generation: 0,
            current: None,
            state: FetchState::Idle,
            stats: FetchStats::default(),
        }
    }

    /// Issue a generation for a descriptor and enter `Loading`
    ///
    /// Returns `None` when the descriptor equals the most recently issued
    /// one: the canonical encoding is the request identity, so an unchanged
    /// descriptor means nothing to refetch (and no automatic retry after an
    /// error, matching the one-attempt-per-descriptor rule).
    pub fn begin(&mut self, descriptor: RequestDescriptor) -> Option<u64> {
        if self.current.as_ref() == Some(&descriptor) {
            self.stats.duplicates_skipped += 1;
            debug!(descriptor = %descriptor, "Descriptor unchanged; fetch skipped");
            return None;
        }

        self.generation += 1;
        self.stats.requests_issued += 1;
        self.state = FetchState::Loading;

        debug!(
            generation = self.generation,
            descriptor = %descriptor,
            "Feed request issued"
        );
        self.current = Some(descriptor);
        Some(self.generation)
    }

    /// Apply a completion if its generation is still the latest
    ///
    /// Returns whether the result was applied. Stale completions are
    /// dropped silently apart from a debug log.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<Vec<FeedItem>, FetchError>,
    ) -> bool {
        if generation != self.generation {
            self.stats.stale_discarded += 1;
            debug!(
                generation,
                latest = self.generation,
                "Stale feed result discarded"
            );
            return false;
        }

        self.stats.results_applied += 1;
        self.state = match outcome {
            Ok(items) => {
                debug!(generation, items = items.len(), "Feed result applied");
                FetchState::Success(items)
            }
            Err(err) => {
                warn!(generation, error = %err, "Feed request failed");
                FetchState::Error(err.to_string())
            }
        };
        true
    }

    /// Current observable state
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Latest issued generation (0 before the first request)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Descriptor of the latest issued request, if any
    pub fn current_descriptor(&self) -> Option<&RequestDescriptor> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> FetchStats {
        self.stats
    }
}

impl Default for RequestSequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Async driver tying the sequencer to the backend client
///
/// Cheap to clone; clones share one sequencer, so overlapping `refresh`
/// calls race exactly like overlapping network responses do.
#[derive(Clone)]
pub struct FeedFetcher {
    client: FeedClient,
    sequencer: Arc<Mutex<RequestSequencer>>,
}

impl FeedFetcher {
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            sequencer: Arc::new(Mutex::new(RequestSequencer::new())),
        }
    }

    /// Issue and complete one fetch for a descriptor
    ///
    /// Skips entirely when the descriptor is unchanged. The lock is never
    /// held across the network await; the only shared mutation is the
    /// begin/complete pair on the sequencer.
    pub async fn refresh(&self, descriptor: RequestDescriptor) {
        let generation = {
            let mut sequencer = self.sequencer.lock().unwrap();
            sequencer.begin(descriptor.clone())
        };
        let Some(generation) = generation else {
            return;
        };

        let outcome = self.client.fetch_feed(&descriptor).await;
        self.sequencer.lock().unwrap().complete(generation, outcome);
    }

    /// Snapshot of the observable state
    pub fn state(&self) -> FetchState {
        self.sequencer.lock().unwrap().state().clone()
    }

    pub fn stats(&self) -> FetchStats {
        self.sequencer.lock().unwrap().stats()
    }
}
