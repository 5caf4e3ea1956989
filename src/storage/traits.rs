//! Storage trait definitions

use crate::graph::{BuildError, EntityStore};
use thiserror::Error;

/// Errors that can occur while loading a snapshot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid graph data: {0}")]
    Build(#[from] BuildError),

    #[error("Membership row references missing {table} row {id}")]
    DanglingRow { table: &'static str, id: i64 },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Something an [`EntityStore`] snapshot can be loaded from.
///
/// Implementations must be thread-safe (Send + Sync) so an engine can reload
/// from a background thread while queries run against the previous snapshot.
pub trait SnapshotSource: Send + Sync {
    /// Read the whole graph into a fresh store
    fn load(&self) -> StorageResult<EntityStore>;

    /// Human-readable description of the source, recorded in store metadata
    fn describe(&self) -> String;
}
