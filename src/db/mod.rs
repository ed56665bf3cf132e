use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use tracing::debug;

use crate::error::StoreError;

pub mod items;
pub mod path;

pub use items::Entry;

/* Owns the connection to the on-disk log for the length of one invocation.
 * The connection is closed when the store is dropped.
 */
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Opens the store at `path`, creating the file and the `items` table if
    /// they don't exist yet. Safe to call against an existing store.
    pub fn initialize(path: &Path) -> Result<Self> {
        let unavailable = |source: Box<dyn std::error::Error + Send + Sync>| {
            StoreError::unavailable(path, source)
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| unavailable(e.into()))?;
        }

        let connection = Connection::open(path).map_err(|e| unavailable(e.into()))?;
        items::create_table(&connection).map_err(|e| unavailable(e.into()))?;
        debug!(path = %path.display(), "opened store");

        Ok(Self { connection })
    }

    pub fn add(&self, description: &str) -> Result<Entry> {
        self.add_at(description, Utc::now().timestamp())
    }

    pub fn add_at(&self, description: &str, created_at: i64) -> Result<Entry> {
        let entry = items::insert(&self.connection, description, created_at)?;
        debug!(id = entry.id, created_at, "added entry");
        Ok(entry)
    }

    /// Entries created strictly after `since`, oldest first. `None` returns
    /// everything.
    pub fn list(&self, since: Option<i64>) -> Result<Vec<Entry>> {
        let since = since.unwrap_or(i64::MIN);
        let entries = items::get_all_since(&self.connection, since)?;
        debug!(since, count = entries.len(), "listed entries");
        Ok(entries)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = items::delete(&self.connection, id)?;
        debug!(id, removed, "deleted entry");
        Ok(removed)
    }
}
