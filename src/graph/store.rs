//! EntityStore: read-only arena snapshot of persons, events and memberships

use super::event::{Event, EventId, EventIdx};
use super::pattern::NamePattern;
use super::person::{Person, PersonId, PersonIdx};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata about a built store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// When the store was frozen
    pub built_at: DateTime<Utc>,
    /// Where the data came from (database path, file name, ...)
    pub source: Option<String>,
}

/// Immutable bipartite graph of persons and events.
///
/// Adjacency is held in both directions as sorted index lists, so traversal
/// never leaves the arena. Build one with [`StoreBuilder`](super::StoreBuilder).
#[derive(Debug, Clone)]
pub struct EntityStore {
    pub(crate) persons: Vec<Person>,
    pub(crate) events: Vec<Event>,
    pub(crate) person_index: HashMap<PersonId, PersonIdx>,
    pub(crate) event_index: HashMap<EventId, EventIdx>,
    pub(crate) metadata: StoreMetadata,
}

impl EntityStore {
    /// Get a person by arena index.
    ///
    /// Panics if the index came from a different store.
    pub fn person(&self, idx: PersonIdx) -> &Person {
        &self.persons[idx.index()]
    }

    /// Get an event by arena index.
    ///
    /// Panics if the index came from a different store.
    pub fn event(&self, idx: EventIdx) -> &Event {
        &self.events[idx.index()]
    }

    pub fn get_person(&self, idx: PersonIdx) -> Option<&Person> {
        self.persons.get(idx.index())
    }

    /// Resolve a stable person identifier
    pub fn person_by_id(&self, id: &PersonId) -> Option<PersonIdx> {
        self.person_index.get(id).copied()
    }

    /// Resolve a stable event identifier
    pub fn event_by_id(&self, id: &EventId) -> Option<EventIdx> {
        self.event_index.get(id).copied()
    }

    /// Find the first person, in insertion order, whose display name matches
    /// the loose pattern built from `text` (see [`NamePattern`]).
    pub fn lookup(&self, text: &str) -> Option<PersonIdx> {
        let pattern = NamePattern::parse(text);
        self.lookup_pattern(&pattern)
    }

    pub fn lookup_pattern(&self, pattern: &NamePattern) -> Option<PersonIdx> {
        self.all_persons()
            .find(|(_, p)| pattern.matches(&p.name))
            .map(|(idx, _)| idx)
    }

    /// All persons in insertion order
    pub fn all_persons(&self) -> impl Iterator<Item = (PersonIdx, &Person)> {
        // at most u32::MAX entries (see the builder), so the counter never overflows
        self.persons.iter().zip(0u32..).map(|(p, i)| (PersonIdx(i), p))
    }

    /// All events in insertion order
    pub fn all_events(&self) -> impl Iterator<Item = (EventIdx, &Event)> {
        self.events.iter().zip(0u32..).map(|(e, i)| (EventIdx(i), e))
    }

    /// First event (lowest index) that both persons take part in
    pub fn first_shared_event(&self, a: PersonIdx, b: PersonIdx) -> Option<EventIdx> {
        self.person(a)
            .events()
            .iter()
            .copied()
            .find(|&e| self.event(e).has_participant(b))
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of distinct person/event memberships
    pub fn membership_count(&self) -> usize {
        self.persons.iter().map(|p| p.events.len()).sum()
    }

    pub fn metadata(&self) -> &StoreMetadata {
        &self.metadata
    }
}
