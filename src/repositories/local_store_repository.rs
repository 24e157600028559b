// src/repositories/local_store_repository.rs
//
// Browser-style key-value persistence

use rusqlite::params;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

/// The local store: plain string keys mapped to plain string values.
/// Callers own the value encoding (usually JSON).
#[cfg_attr(test, mockall::automock)]
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

pub struct SqliteLocalStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteLocalStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl LocalStore for SqliteLocalStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        match conn.query_row(
            "SELECT value FROM local_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        ) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO local_store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        // Removing an absent key is a no-op, matching localStorage semantics
        conn.execute("DELETE FROM local_store WHERE key = ?1", params![key])?;

        Ok(())
    }
}
