//! Event records: the group-production side of the bipartite graph

use super::person::PersonIdx;
use serde::{Deserialize, Serialize};

/// Stable external identifier for an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Create an EventId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Position of an event in an [`EntityStore`](super::EntityStore) arena.
///
/// Ascending index order is ingestion order; the path materializer uses it
/// to pick among several shared events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventIdx(pub(crate) u32);

impl EventIdx {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A group-event (episode, film) linking its participants
#[derive(Debug, Clone)]
pub struct Event {
    /// Stable external identifier
    pub id: EventId,
    /// Human-readable title
    pub title: String,
    /// Category tag (e.g. "episode", "movie", "tv series")
    pub kind: String,
    /// Participants, sorted ascending by person index
    pub(crate) participants: Vec<PersonIdx>,
}

impl Event {
    /// Participants of this event, in enumeration order
    pub fn participants(&self) -> &[PersonIdx] {
        &self.participants
    }

    /// Whether the given person takes part in this event
    pub fn has_participant(&self, person: PersonIdx) -> bool {
        self.participants.binary_search(&person).is_ok()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
