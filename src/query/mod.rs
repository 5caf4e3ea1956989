//! Query system for degrees-of-separation lookups
//!
//! Provides the chain search, the step materializer and the connection
//! query that ties them together.

mod chain;
mod config;
mod connect;
mod materialize;
mod types;

pub use chain::shortest_chain;
pub use config::{ConfigError, SearchConfig, DEFAULT_DENYLIST};
pub use connect::ConnectionQuery;
pub use materialize::materialize;
pub use types::{
    ChainStep, Connection, Endpoint, EventSummary, PersonChain, PersonSummary, QueryError,
    QueryResult, SearchOutcome,
};
