//! JSON snapshot source

use super::traits::{SnapshotSource, StorageResult};
use crate::graph::{EntityStore, EventId, PersonId, StoreBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A person entry. The same id may appear more than once with different
/// name variants; the most frequent variant becomes the display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
}

/// An event entry with its participants' ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub participants: Vec<PersonId>,
}

/// Flat graph document:
///
/// ```json
/// {
///   "persons": [{"id": "ch1", "name": "Spock"}],
///   "events": [{"id": "tos-1", "title": "The Cage", "kind": "episode", "participants": ["ch1"]}]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub persons: Vec<PersonRecord>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

impl GraphDocument {
    /// Build a store, keeping document order as insertion order
    pub fn to_store(&self, source: Option<&str>) -> StorageResult<EntityStore> {
        let mut builder = StoreBuilder::new();
        if let Some(source) = source {
            builder = builder.with_source(source);
        }

        for person in &self.persons {
            builder.person(person.id.clone(), &person.name)?;
        }
        for event in &self.events {
            builder.event(event.id.clone(), &event.title, &event.kind)?;
        }
        for event in &self.events {
            for participant in &event.participants {
                builder.membership(participant.clone(), event.id.clone())?;
            }
        }

        Ok(builder.build())
    }
}

/// Snapshot source backed by a parsed [`GraphDocument`]
#[derive(Debug, Clone)]
pub struct JsonSource {
    document: GraphDocument,
    origin: String,
}

impl JsonSource {
    /// Read and parse a document from disk
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let document = serde_json::from_str(&text)?;
        Ok(Self {
            document,
            origin: path.as_ref().display().to_string(),
        })
    }

    pub fn parse(text: &str) -> StorageResult<Self> {
        Ok(Self {
            document: serde_json::from_str(text)?,
            origin: "<inline>".to_string(),
        })
    }

    pub fn from_document(document: GraphDocument) -> Self {
        Self {
            document,
            origin: "<document>".to_string(),
        }
    }

    pub fn document(&self) -> &GraphDocument {
        &self.document
    }
}

impl SnapshotSource for JsonSource {
    fn load(&self) -> StorageResult<EntityStore> {
        let store = self.document.to_store(Some(&self.origin))?;
        tracing::info!(
            source = %self.origin,
            persons = store.person_count(),
            events = store.event_count(),
            "loaded snapshot from json"
        );
        Ok(store)
    }

    fn describe(&self) -> String {
        self.origin.clone()
    }
}
