//! Snapshot sources
//!
//! Ingestion writes persons, events and memberships somewhere; these sources
//! read them back into an immutable [`EntityStore`](crate::EntityStore).
//! `SqliteSource` reads the relational layout, `JsonSource` a flat document.

mod json;
mod sqlite;
mod traits;

pub use json::{EventRecord, GraphDocument, JsonSource, PersonRecord};
pub use sqlite::SqliteSource;
pub use traits::{SnapshotSource, StorageError, StorageResult};
