//! SixDegrees: degrees-of-separation engine
//!
//! Finds the shortest chain of shared events (episodes, films) linking two
//! people, the way a Bacon or Erdős number is computed.
//!
//! # Core Concepts
//!
//! - **Persons** and **Events**: the two node kinds of a bipartite graph
//! - **EntityStore**: an immutable arena snapshot of that graph
//! - **ConnectionQuery**: resolves two names and reports the chain between them
//!
//! # Example
//!
//! ```
//! use sixdegrees::{Connection, ConnectionQuery, SearchConfig, StoreBuilder};
//!
//! let mut builder = StoreBuilder::new();
//! builder.person("kirk", "James T. Kirk").unwrap();
//! builder.person("spock", "Spock").unwrap();
//! builder.event("tmp", "Star Trek: The Motion Picture", "movie").unwrap();
//! builder.membership("kirk", "tmp").unwrap();
//! builder.membership("spock", "tmp").unwrap();
//! let store = builder.build();
//!
//! let connection = ConnectionQuery::between("Kirk", "Spock")
//!     .execute(&store, &SearchConfig::default())
//!     .unwrap();
//! assert_eq!(connection.degrees(), Some(1));
//! assert_eq!(
//!     ConnectionQuery::between("Spock", "spock").execute(&store, &SearchConfig::default()).unwrap(),
//!     Connection::ZeroHops
//! );
//! ```

mod graph;
pub mod query;
pub mod storage;

pub use graph::{
    BuildError, EntityStore, Event, EventId, EventIdx, GraphId, NamePattern, Person, PersonId,
    PersonIdx, SixDegrees, SixDegreesError, SixDegreesResult, StoreBuilder, StoreMetadata,
};
pub use query::{
    materialize, shortest_chain, ChainStep, ConfigError, Connection, ConnectionQuery, Endpoint,
    EventSummary, PersonChain, PersonSummary, QueryError, QueryResult, SearchConfig,
    SearchOutcome,
};
pub use storage::{
    EventRecord, GraphDocument, JsonSource, PersonRecord, SnapshotSource, SqliteSource,
    StorageError, StorageResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
