//! Connection queries: the entry point presentation layers call

use super::chain::shortest_chain;
use super::config::SearchConfig;
use super::materialize::materialize;
use super::types::{Connection, Endpoint, QueryResult, SearchOutcome};
use crate::graph::EntityStore;

/// Query for the degrees of separation between two persons
#[derive(Debug, Clone)]
pub struct ConnectionQuery {
    /// Where the reported chain starts
    pub start: Endpoint,
    /// Where the reported chain ends
    pub end: Endpoint,
}

impl ConnectionQuery {
    /// Create a query between two endpoints (names or resolved ids)
    pub fn between(start: impl Into<Endpoint>, end: impl Into<Endpoint>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Execute the query.
    ///
    /// Unresolvable endpoints yield `NoConnection`, as does a pair with no
    /// chain between them. Two endpoints resolving to the same person yield
    /// `ZeroHops`. Callers that need to tell an unknown name from a
    /// disconnected one resolve the names themselves first.
    pub fn execute(&self, store: &EntityStore, config: &SearchConfig) -> QueryResult<Connection> {
        tracing::debug!(start = %self.start, end = %self.end, "connection query");

        let Some(start) = self.start.resolve(store) else {
            tracing::warn!(endpoint = %self.start, "start endpoint did not resolve");
            return Ok(Connection::NoConnection);
        };
        let Some(end) = self.end.resolve(store) else {
            tracing::warn!(endpoint = %self.end, "end endpoint did not resolve");
            return Ok(Connection::NoConnection);
        };

        match shortest_chain(store, start, end, config)? {
            SearchOutcome::Same => Ok(Connection::ZeroHops),
            SearchOutcome::NotFound => Ok(Connection::NoConnection),
            SearchOutcome::Found(chain) => Ok(Connection::Chain(materialize(store, &chain)?)),
        }
    }
}
