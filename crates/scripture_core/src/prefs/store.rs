//! Key-value preference storage.
//!
//! # Responsibility
//! - Define the storage contract used by the application context.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - Keys are opaque, case-sensitive strings.
//! - `set` replaces any previous value for the key.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PrefResult<T> = Result<T, PreferenceError>;

/// Preference storage or decoding failure.
#[derive(Debug)]
pub enum PreferenceError {
    Db(DbError),
    InvalidValue { key: String, value: String },
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidValue { key, value } => {
                write!(f, "preference `{key}` holds undecodable value `{value}`")
            }
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<DbError> for PreferenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PreferenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Device key-value storage contract.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> PrefResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PrefResult<()>;
}

/// SQLite-backed preference store over a migrated connection.
pub struct SqlitePreferenceStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceStore<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn get(&self, key: &str) -> PrefResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> PrefResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CAST(strftime('%s', 'now') AS INTEGER) * 1000;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local store for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> PrefResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PrefResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
    use crate::db::open_db_in_memory;

    #[test]
    fn sqlite_store_round_trips_and_overwrites() {
        let conn = open_db_in_memory().unwrap();
        let store = SqlitePreferenceStore::new(&conn);

        assert_eq!(store.get("appTheme").unwrap(), None);
        store.set("appTheme", "true").unwrap();
        store.set("appTheme", "false").unwrap();
        assert_eq!(store.get("appTheme").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn memory_store_keeps_keys_separate() {
        let store = MemoryPreferenceStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("A").unwrap(), None);
    }
}
