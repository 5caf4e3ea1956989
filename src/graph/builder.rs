//! StoreBuilder: how ingestion collaborators populate an EntityStore

use super::event::{Event, EventId, EventIdx};
use super::person::{Person, PersonId, PersonIdx};
use super::store::{EntityStore, StoreMetadata};
use chrono::Utc;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while assembling a store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Membership references unknown person: {0}")]
    UnknownPerson(PersonId),

    #[error("Membership references unknown event: {0}")]
    UnknownEvent(EventId),

    #[error("Too many {kind} for a u32 arena index")]
    CapacityExceeded { kind: &'static str },
}

/// Index the next arena entry will get. Indices stay below `u32::MAX`, so
/// a store never holds more than `u32::MAX` entries of one kind.
fn next_slot(len: usize, kind: &'static str) -> Result<u32, BuildError> {
    u32::try_from(len)
        .ok()
        .filter(|&slot| slot < u32::MAX)
        .ok_or(BuildError::CapacityExceeded { kind })
}

/// A person still collecting name variants
#[derive(Debug)]
struct PendingPerson {
    id: PersonId,
    /// (variant, count) in first-seen order
    names: Vec<(String, usize)>,
    events: Vec<EventIdx>,
}

impl PendingPerson {
    fn vote(&mut self, name: &str) {
        match self.names.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => self.names.push((name.to_string(), 1)),
        }
    }

    /// Most frequent variant; earlier variants win ties
    fn display_name(&self) -> String {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.names {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(n, _)| n.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Accumulates persons, events and memberships, then freezes them into an
/// [`EntityStore`].
///
/// Calling [`person`](Self::person) again for a known id records another
/// name variant; the display name is decided by majority when the store is
/// built.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    persons: Vec<PendingPerson>,
    events: Vec<Event>,
    person_index: HashMap<PersonId, PersonIdx>,
    event_index: HashMap<EventId, EventIdx>,
    source: Option<String>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the data came from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Register a person, or vote for one more name variant of a known one
    pub fn person(&mut self, id: impl Into<PersonId>, name: &str) -> Result<PersonIdx, BuildError> {
        let id = id.into();
        if let Some(&idx) = self.person_index.get(&id) {
            self.persons[idx.index()].vote(name);
            return Ok(idx);
        }

        let idx = PersonIdx(next_slot(self.persons.len(), "persons")?);
        let mut pending = PendingPerson {
            id: id.clone(),
            names: Vec::new(),
            events: Vec::new(),
        };
        pending.vote(name);
        self.persons.push(pending);
        self.person_index.insert(id, idx);
        Ok(idx)
    }

    /// Register an event. The first registration of an id wins.
    pub fn event(
        &mut self,
        id: impl Into<EventId>,
        title: &str,
        kind: &str,
    ) -> Result<EventIdx, BuildError> {
        let id = id.into();
        if let Some(&idx) = self.event_index.get(&id) {
            return Ok(idx);
        }

        let idx = EventIdx(next_slot(self.events.len(), "events")?);
        self.events.push(Event {
            id: id.clone(),
            title: title.to_string(),
            kind: kind.to_string(),
            participants: Vec::new(),
        });
        self.event_index.insert(id, idx);
        Ok(idx)
    }

    /// Link a person to an event by their stable identifiers
    pub fn membership(
        &mut self,
        person: impl Into<PersonId>,
        event: impl Into<EventId>,
    ) -> Result<(), BuildError> {
        let person = person.into();
        let event = event.into();
        let p = *self
            .person_index
            .get(&person)
            .ok_or(BuildError::UnknownPerson(person))?;
        let e = *self
            .event_index
            .get(&event)
            .ok_or(BuildError::UnknownEvent(event))?;
        self.link(p, e);
        Ok(())
    }

    /// Link by arena indices returned from [`person`](Self::person) and
    /// [`event`](Self::event)
    pub fn link(&mut self, person: PersonIdx, event: EventIdx) {
        self.persons[person.index()].events.push(event);
        self.events[event.index()].participants.push(person);
    }

    /// Freeze into an immutable store with sorted, deduplicated adjacency
    pub fn build(self) -> EntityStore {
        let persons = self
            .persons
            .into_iter()
            .map(|pending| {
                let name = pending.display_name();
                let mut events = pending.events;
                events.sort_unstable();
                events.dedup();
                Person {
                    id: pending.id,
                    name,
                    events,
                }
            })
            .collect();

        let events = self
            .events
            .into_iter()
            .map(|mut event| {
                event.participants.sort_unstable();
                event.participants.dedup();
                event
            })
            .collect();

        EntityStore {
            persons,
            events,
            person_index: self.person_index,
            event_index: self.event_index,
            metadata: StoreMetadata {
                built_at: Utc::now(),
                source: self.source,
            },
        }
    }
}
