//! SQLite-backed state storage.
//!
//! The database holds a single key-value table. The whole application state
//! lives under [`STORAGE_KEY`] as one JSON document.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use super::gateway::{StateGateway, STORAGE_KEY};
use crate::error::StorageError;

/// File name of the database inside the data directory.
pub const DATABASE_FILE: &str = "fibro-balance.db";

/// SQLite database for the state snapshot.
pub struct SqliteGateway {
    conn: Connection,
}

impl SqliteGateway {
    /// Open the database at `<data_dir>/fibro-balance.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        Self::open_at(&data_dir()?.join(DATABASE_FILE))
    }

    /// Open (or create) the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a key from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

impl StateGateway for SqliteGateway {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.kv_get(STORAGE_KEY)?)
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        Ok(self.kv_set(STORAGE_KEY, payload)?)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Ok(self.kv_delete(STORAGE_KEY)?)
    }
}
