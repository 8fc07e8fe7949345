//! Key-value persistence backends.
//!
//! All tracker state (reference date, cycle length, the history log)
//! lives under string keys behind the `KeyValueStore` trait. SQLite
//! backs the real application; an in-memory map backs tests and hosts
//! without a filesystem.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection};

use crate::error::StorageError;

use super::data_dir;

/// Pluggable string key-value backend for tracker state.
pub trait KeyValueStore: Send {
    /// Value stored under `key`, `None` when absent.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// SQLite-backed key-value store.
///
/// One `kv` table; values are opaque strings, typically JSON or RFC3339
/// scalars written by the callers.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `~/.config/lunara/lunara.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory is unavailable or the
    /// database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("lunara.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate(path)?;
        Ok(store)
    }

    /// Open an in-memory store (tests, throwaway sessions).
    pub fn open_memory() -> Result<Self, StorageError> {
        let path = Path::new(":memory:");
        let conn = Connection::open_in_memory().map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate(path)?;
        Ok(store)
    }

    fn migrate(&self, path: &Path) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(|source| StorageError::OpenFailed {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl KeyValueStore for SqliteStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(|e| read_failed(key, &e))?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(read_failed(key, &e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(|e| write_failed(key, &e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| write_failed(key, &e))?;
        Ok(())
    }
}

fn read_failed(key: &str, err: &rusqlite::Error) -> StorageError {
    StorageError::ReadFailed {
        key: key.to_string(),
        message: err.to_string(),
    }
}

fn write_failed(key: &str, err: &rusqlite::Error) -> StorageError {
    StorageError::WriteFailed {
        key: key.to_string(),
        message: err.to_string(),
    }
}

/// In-memory key-value store. Clones share the same underlying map, so
/// a test can hand one clone to a store and inspect the other.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::ReadFailed {
            key: key.to_string(),
            message: "lock poisoned".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::WriteFailed {
            key: key.to_string(),
            message: "lock poisoned".to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::WriteFailed {
            key: key.to_string(),
            message: "lock poisoned".to_string(),
        })?;
        entries.remove(key);
        Ok(())
    }
}
