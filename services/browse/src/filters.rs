//! Filter state store
//!
//! Single source of truth for the current facet selection and free-text
//! query. Every mutation synchronously publishes the new snapshot to all
//! subscribers; consumers derive request descriptors from the snapshot
//! without assuming anything about the UI driving the mutations.

use types::filter::FeedFilters;

/// One selectable filter facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Source,
    Market,
    Label,
    Flag,
    Topic,
}

impl Facet {
    /// Facet name as it appears in commands and request parameters
    pub fn name(&self) -> &'static str {
        match self {
            Facet::Source => "source",
            Facet::Market => "market",
            Facet::Label => "label",
            Facet::Flag => "flag",
            Facet::Topic => "topic",
        }
    }

    /// Parse a facet name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "source" => Some(Facet::Source),
            "market" => Some(Facet::Market),
            "label" => Some(Facet::Label),
            "flag" => Some(Facet::Flag),
            "topic" => Some(Facet::Topic),
            _ => None,
        }
    }
}

type Subscriber = Box<dyn FnMut(&FeedFilters) + Send>;

/// Holds the current filter selection and notifies on change
///
/// Accepts any string per facet; values are not checked against the loaded
/// vocabularies. An unrecognized value round-trips into a query that simply
/// matches nothing.
pub struct FilterState {
    current: FeedFilters,
    subscribers: Vec<Subscriber>,
}

impl FilterState {
    /// Create with all facets unconstrained and an empty query
    pub fn new() -> Self {
        Self {
            current: FeedFilters::default(),
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> FeedFilters {
        self.current.clone()
    }

    /// Register a subscriber; called synchronously with the new snapshot
    /// after every mutation
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&FeedFilters) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Set the free-text query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.current.query = query.into();
        self.notify();
    }

    /// Set one selection facet
    pub fn set_facet(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        match facet {
            Facet::Source => self.current.source = value,
            Facet::Market => self.current.market = value,
            Facet::Label => self.current.label = value,
            Facet::Flag => self.current.flag = value,
            Facet::Topic => self.current.topic = value,
        }
        self.notify();
    }

    /// Reset everything to the unconstrained default
    pub fn reset(&mut self) {
        self.current = FeedFilters::default();
        self.notify();
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.current);
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
