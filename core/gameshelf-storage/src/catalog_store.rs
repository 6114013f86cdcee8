//! Catalog entity store backed by SQLite.

use crate::error::{StorageError, StorageResult};
use gameshelf_model::CatalogEntity;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    );

    CREATE TABLE IF NOT EXISTS publishers (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    );
";

/// Read access to catalog entities.
///
/// Every call is a single fallible query. Implementations must not retry.
pub trait CatalogSource: Send + Sync + 'static {
    /// Returns every row of `E` in store-defined order.
    fn list<E: CatalogEntity>(&self) -> StorageResult<Vec<E>>;

    /// Returns the row of `E` with the given primary key, if any.
    fn get<E: CatalogEntity>(&self, id: i64) -> StorageResult<Option<E>>;
}

/// SQLite-backed catalog store.
#[derive(Clone)]
pub struct CatalogStore {
    conn: Arc<Mutex<Connection>>,
}

impl CatalogStore {
    /// Opens (or creates) a catalog database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        debug!("opening catalog database at {}", path.display());
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory catalog database (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wraps an existing connection, creating the catalog tables if missing.
    pub fn from_connection(conn: Connection) -> StorageResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the locked connection.
    ///
    /// Administrative tooling uses this to populate the store; the readers
    /// use it for their own queries.
    ///
    /// A panic inside `f` poisons the lock. Every later call on this store,
    /// and on its clones, then fails with [`StorageError::LockPoisoned`].
    pub fn with_connection<T, F>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(f(&conn)?)
    }
}

fn entity_from_row<E: CatalogEntity>(row: &Row<'_>) -> rusqlite::Result<E> {
    Ok(E::from_columns(row.get(0)?, row.get(1)?, row.get(2)?))
}

impl CatalogSource for CatalogStore {
    fn list<E: CatalogEntity>(&self) -> StorageResult<Vec<E>> {
        let sql = format!("SELECT id, name, description FROM {}", E::TABLE);
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], entity_from_row::<E>)?;
            rows.collect()
        })
    }

    fn get<E: CatalogEntity>(&self, id: i64) -> StorageResult<Option<E>> {
        let sql = format!("SELECT id, name, description FROM {} WHERE id = ?1", E::TABLE);
        self.with_connection(|conn| {
            conn.query_row(&sql, params![id], entity_from_row::<E>)
                .optional()
        })
    }
}
