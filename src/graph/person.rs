//! Person records: the people side of the bipartite graph

use super::event::EventIdx;
use serde::{Deserialize, Serialize};

/// Stable external identifier for a person (e.g. a role id from the source database)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create a PersonId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Position of a person in an [`EntityStore`](super::EntityStore) arena.
///
/// Only meaningful for the store that produced it. Ordering follows
/// insertion order, which is also the store's enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonIdx(pub(crate) u32);

impl PersonIdx {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A person (actor or character) that participates in events
#[derive(Debug, Clone)]
pub struct Person {
    /// Stable external identifier
    pub id: PersonId,
    /// Display name (most frequent variant seen during ingestion)
    pub name: String,
    /// Memberships, sorted ascending by event index
    pub(crate) events: Vec<EventIdx>,
}

impl Person {
    /// Events this person participates in, in enumeration order
    pub fn events(&self) -> &[EventIdx] {
        &self.events
    }

    /// Whether the person appears in the given event
    pub fn appears_in(&self, event: EventIdx) -> bool {
        self.events.binary_search(&event).is_ok()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
