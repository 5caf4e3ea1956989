//! Query types and result structures

use crate::graph::{EntityStore, Event, EventId, Person, PersonId, PersonIdx};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a query
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Consecutive chain members share no event: the graph or the traversal is broken
    #[error("Chain step {from} -> {to} has no shared event")]
    BrokenChain { from: PersonId, to: PersonId },

    #[error("Search gave up after expanding {expanded} persons")]
    BudgetExhausted { expanded: usize },
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// How a query endpoint is named by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Loose display-name text, resolved with [`EntityStore::lookup`]
    Name(String),
    /// A stable identifier resolved beforehand
    Id(PersonId),
}

impl Endpoint {
    pub fn resolve(&self, store: &EntityStore) -> Option<PersonIdx> {
        match self {
            Self::Name(text) => store.lookup(text),
            Self::Id(id) => store.person_by_id(id),
        }
    }
}

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl From<PersonId> for Endpoint {
    fn from(id: PersonId) -> Self {
        Self::Id(id)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(text) => write!(f, "{:?}", text),
            Self::Id(id) => write!(f, "#{}", id),
        }
    }
}

/// Person chain produced by the search, in discovery order: the search seed
/// (the query's end) first and the query's start last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonChain {
    pub(crate) persons: Vec<PersonIdx>,
}

impl PersonChain {
    /// Members from the seed outwards
    pub fn as_discovered(&self) -> &[PersonIdx] {
        &self.persons
    }

    /// Members oriented start to end
    pub fn from_start(&self) -> impl Iterator<Item = PersonIdx> + '_ {
        self.persons.iter().rev().copied()
    }

    /// Number of hops (events) in the chain
    pub fn hops(&self) -> usize {
        self.persons.len().saturating_sub(1)
    }
}

/// Raw outcome of a chain search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Both endpoints are the same person
    Same,
    Found(PersonChain),
    NotFound,
}

/// Event fields reported in a chain step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: EventId,
    pub title: String,
    pub kind: String,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            kind: event.kind.clone(),
        }
    }
}

/// Person fields reported in a chain step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
}

impl From<&Person> for PersonSummary {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
        }
    }
}

/// One link of a reported chain: an event shared with the previous person,
/// and the next person reached through it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStep {
    pub event: EventSummary,
    pub person: PersonSummary,
}

/// Outcome of a connection query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "steps", rename_all = "snake_case")]
pub enum Connection {
    /// Both names denote the same person
    ZeroHops,
    /// Steps ordered from the start person to the end person
    Chain(Vec<ChainStep>),
    /// Unknown name, or no chain within the configured depth
    NoConnection,
}

impl Connection {
    /// Degrees of separation: `Some(0)` for the same person, `None` when unconnected
    pub fn degrees(&self) -> Option<usize> {
        match self {
            Self::ZeroHops => Some(0),
            Self::Chain(steps) => Some(steps.len()),
            Self::NoConnection => None,
        }
    }

    pub fn steps(&self) -> &[ChainStep] {
        match self {
            Self::Chain(steps) => steps,
            _ => &[],
        }
    }
}
