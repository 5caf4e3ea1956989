//! SixDegrees: registry of published graph snapshots

use super::builder::BuildError;
use super::store::EntityStore;
use crate::query::{ConfigError, Connection, ConnectionQuery, Endpoint, PersonSummary, QueryError, SearchConfig};
use crate::storage::{SnapshotSource, StorageError};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Identifier of a published graph (e.g. "star-trek")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphId(String);

impl GraphId {
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GraphId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GraphId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Errors that can occur in SixDegrees operations
#[derive(Debug, Error)]
pub enum SixDegreesError {
    #[error("Graph not found: {0}")]
    GraphNotFound(GraphId),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for SixDegrees operations
pub type SixDegreesResult<T> = Result<T, SixDegreesError>;

/// The main engine.
///
/// Holds immutable graph snapshots behind `Arc`. Publishing a graph under an
/// existing id swaps the snapshot; queries already running keep the one they
/// started with, so readers never observe a half-ingested graph.
#[derive(Debug, Default)]
pub struct SixDegrees {
    graphs: DashMap<GraphId, Arc<EntityStore>>,
    config: SearchConfig,
}

impl SixDegrees {
    /// Create an engine with the default search config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            graphs: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Publish a snapshot, returning the one it replaced
    pub fn publish(&self, id: impl Into<GraphId>, store: EntityStore) -> Option<Arc<EntityStore>> {
        self.install(id.into(), Arc::new(store))
    }

    /// Load a snapshot from a source and publish it
    pub fn load(
        &self,
        id: impl Into<GraphId>,
        source: &dyn SnapshotSource,
    ) -> SixDegreesResult<Arc<EntityStore>> {
        let store = Arc::new(source.load()?);
        self.install(id.into(), Arc::clone(&store));
        Ok(store)
    }

    fn install(&self, id: GraphId, store: Arc<EntityStore>) -> Option<Arc<EntityStore>> {
        tracing::info!(
            graph = %id,
            persons = store.person_count(),
            events = store.event_count(),
            memberships = store.membership_count(),
            "publishing graph snapshot"
        );
        self.graphs.insert(id, store)
    }

    /// Get the current snapshot of a graph
    pub fn snapshot(&self, id: &GraphId) -> Option<Arc<EntityStore>> {
        self.graphs.get(id).map(|r| Arc::clone(r.value()))
    }

    /// Remove a graph
    pub fn remove(&self, id: &GraphId) -> Option<Arc<EntityStore>> {
        self.graphs.remove(id).map(|(_, store)| store)
    }

    /// List graph ids, sorted
    pub fn list_graphs(&self) -> Vec<GraphId> {
        let mut ids: Vec<GraphId> = self.graphs.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    pub fn has_graph(&self, id: &GraphId) -> bool {
        self.graphs.contains_key(id)
    }

    /// Resolve loose name text to a person, for callers that need to tell
    /// an unknown name from a disconnected one
    pub fn resolve(&self, graph: &GraphId, name: &str) -> SixDegreesResult<Option<PersonSummary>> {
        let store = self.require(graph)?;
        Ok(store
            .lookup(name)
            .map(|idx| PersonSummary::from(store.person(idx))))
    }

    /// Degrees of separation between two persons of a published graph
    pub fn find_connection(
        &self,
        graph: &GraphId,
        start: impl Into<Endpoint>,
        end: impl Into<Endpoint>,
    ) -> SixDegreesResult<Connection> {
        let store = self.require(graph)?;
        let connection = ConnectionQuery::between(start, end).execute(&store, &self.config)?;
        Ok(connection)
    }

    fn require(&self, graph: &GraphId) -> SixDegreesResult<Arc<EntityStore>> {
        self.snapshot(graph)
            .ok_or_else(|| SixDegreesError::GraphNotFound(graph.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::StoreBuilder;
    use crate::storage::JsonSource;

    fn pair(a: &str, b: &str) -> EntityStore {
        let mut builder = StoreBuilder::new();
        builder.person(a, a).unwrap();
        builder.person(b, b).unwrap();
        builder.event("e", "Shared", "movie").unwrap();
        builder.membership(a, "e").unwrap();
        builder.membership(b, "e").unwrap();
        builder.build()
    }

    #[test]
    fn test_create_engine() {
        let engine = SixDegrees::new();
        assert_eq!(engine.graph_count(), 0);
        assert_eq!(engine.config(), &SearchConfig::default());
    }

    #[test]
    fn test_publish_and_snapshot() {
        let engine = SixDegrees::new();
        let id = GraphId::from("trek");

        assert!(engine.publish(id.clone(), pair("Kirk", "Spock")).is_none());
        assert!(engine.has_graph(&id));
        assert_eq!(engine.snapshot(&id).unwrap().person_count(), 2);
    }

    #[test]
    fn test_republish_keeps_old_snapshot_alive() {
        let engine = SixDegrees::new();
        let id = GraphId::from("trek");
        engine.publish(id.clone(), pair("Kirk", "Spock"));

        let held = engine.snapshot(&id).unwrap();
        let replaced = engine.publish(id.clone(), pair("Picard", "Riker")).unwrap();

        assert!(Arc::ptr_eq(&held, &replaced));
        assert!(held.lookup("Kirk").is_some());
        assert!(engine.snapshot(&id).unwrap().lookup("Kirk").is_none());
    }

    #[test]
    fn test_remove_and_list() {
        let engine = SixDegrees::new();
        engine.publish("b", pair("X", "Y"));
        engine.publish("a", pair("X", "Y"));
        assert_eq!(engine.list_graphs(), vec![GraphId::from("a"), GraphId::from("b")]);

        assert!(engine.remove(&GraphId::from("a")).is_some());
        assert_eq!(engine.graph_count(), 1);
    }

    #[test]
    fn test_find_connection() {
        let engine = SixDegrees::new();
        engine.publish("trek", pair("Kirk", "Spock"));

        let connection = engine
            .find_connection(&GraphId::from("trek"), "kirk", "spock")
            .unwrap();
        assert_eq!(connection.degrees(), Some(1));
        assert_eq!(connection.steps()[0].event.title, "Shared");
    }

    #[test]
    fn test_unknown_graph() {
        let engine = SixDegrees::new();
        let result = engine.find_connection(&GraphId::from("nope"), "a", "b");
        assert!(matches!(result, Err(SixDegreesError::GraphNotFound(_))));
    }

    #[test]
    fn test_resolve() {
        let engine = SixDegrees::new();
        engine.publish("trek", pair("Kirk", "Spock"));
        let id = GraphId::from("trek");

        assert_eq!(engine.resolve(&id, "spo").unwrap().unwrap().name, "Spock");
        assert!(engine.resolve(&id, "Data").unwrap().is_none());
    }

    #[test]
    fn test_budget_error_surfaces() {
        let engine = SixDegrees::with_config(SearchConfig::unrestricted().with_max_expansions(1).unwrap());
        let mut b = StoreBuilder::new();
        for id in ["A", "B", "C"] {
            b.person(id, id).unwrap();
        }
        b.event("e1", "E1", "movie").unwrap();
        b.event("e2", "E2", "movie").unwrap();
        for (p, e) in [("A", "e1"), ("B", "e1"), ("B", "e2"), ("C", "e2")] {
            b.membership(p, e).unwrap();
        }
        engine.publish("g", b.build());

        let result = engine.find_connection(&GraphId::from("g"), "A", "C");
        assert!(matches!(
            result,
            Err(SixDegreesError::Query(QueryError::BudgetExhausted { .. }))
        ));
    }

    #[test]
    fn test_load_returns_the_published_snapshot() {
        let engine = SixDegrees::new();
        let id = GraphId::from("trek");
        let source = JsonSource::parse(r#"{"persons": [{"id": "q", "name": "Q"}]}"#).unwrap();

        let loaded = engine.load(id.clone(), &source).unwrap();
        assert!(Arc::ptr_eq(&loaded, &engine.snapshot(&id).unwrap()));

        // the caller's snapshot outlives removal from the registry
        engine.remove(&id);
        assert!(!engine.has_graph(&id));
        assert_eq!(loaded.person_count(), 1);
    }
}
