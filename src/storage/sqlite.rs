//! SQLite snapshot source

use super::traits::{SnapshotSource, StorageError, StorageResult};
use crate::graph::{EntityStore, EventId, PersonId, StoreBuilder};
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Reads the character/appearance tables written by the ingestion pipeline.
///
/// Layout:
/// - `character(id, role_id, name)`: persons; `role_id` is the stable id
/// - `appearance(id, title, kind)`: events
/// - `character_appearance(character_id, appearance_id)`: memberships
///
/// Rows are read in primary-key order, which becomes the store's insertion
/// order. Thread-safe via internal mutex on the connection.
pub struct SqliteSource {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteSource {
    /// Create the tables when missing. Existing data is left untouched.
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS character (
                id INTEGER PRIMARY KEY,
                role_id TEXT UNIQUE,
                name TEXT
            );

            CREATE TABLE IF NOT EXISTS appearance (
                id INTEGER PRIMARY KEY,
                title TEXT,
                kind TEXT
            );

            CREATE TABLE IF NOT EXISTS character_appearance (
                character_id INTEGER REFERENCES character(id),
                appearance_id INTEGER REFERENCES appearance(id)
            );
            "#,
        )?;
        Ok(())
    }

    /// Open or create a database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path.as_ref())?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // a panic while holding the lock cannot leave a read-only connection inconsistent
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self, conn: &Connection) -> StorageResult<EntityStore> {
        let mut builder = StoreBuilder::new().with_source(self.describe());

        let mut persons: HashMap<i64, PersonId> = HashMap::new();
        let mut stmt = conn.prepare("SELECT id, role_id, name FROM character ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })?;
        for row in rows {
            let (row_id, role_id, name) = row?;
            let id = PersonId::from(role_id.unwrap_or_else(|| format!("character:{}", row_id)));
            let name = name.unwrap_or_else(|| id.to_string());
            builder.person(id.clone(), &name)?;
            persons.insert(row_id, id);
        }

        let mut events: HashMap<i64, EventId> = HashMap::new();
        let mut stmt = conn.prepare("SELECT id, title, kind FROM appearance ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })?;
        for row in rows {
            let (row_id, title, kind) = row?;
            let id = EventId::from(format!("appearance:{}", row_id));
            builder.event(
                id.clone(),
                title.as_deref().unwrap_or_default(),
                kind.as_deref().unwrap_or_default(),
            )?;
            events.insert(row_id, id);
        }

        let mut stmt = conn.prepare(
            "SELECT character_id, appearance_id FROM character_appearance ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
        for row in rows {
            let (character_id, appearance_id) = row?;
            let person = persons.get(&character_id).ok_or(StorageError::DanglingRow {
                table: "character",
                id: character_id,
            })?;
            let event = events.get(&appearance_id).ok_or(StorageError::DanglingRow {
                table: "appearance",
                id: appearance_id,
            })?;
            builder.membership(person.clone(), event.clone())?;
        }

        Ok(builder.build())
    }
}

impl SnapshotSource for SqliteSource {
    fn load(&self) -> StorageResult<EntityStore> {
        let conn = self.lock();
        let store = self.read(&conn)?;
        tracing::info!(
            source = %self.describe(),
            persons = store.person_count(),
            events = store.event_count(),
            "loaded snapshot from sqlite"
        );
        Ok(store)
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => ":memory:".to_string(),
        }
    }
}
