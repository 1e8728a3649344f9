//! SQLite settings store for Courier.
//!
//! This crate persists the flat key-value configuration (backend
//! credentials, collection identifiers, column aliases) using SQLx with
//! SQLite. Values never expire; callers take a [`store::snapshot`] at
//! the start of each operation instead of caching settings in memory.
//!
//! # Example
//!
//! ```no_run
//! use settings::{keys, store, SettingsStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = SettingsStore::connect("sqlite:courier.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     store::set(db.pool(), keys::DATA_SOURCE, "notion").await?;
//!     let snapshot = store::snapshot(db.pool()).await?;
//!     assert_eq!(snapshot.get(keys::DATA_SOURCE).map(String::as_str), Some("notion"));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod keys;
pub mod store;

pub use error::{Result, SettingsError};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Settings database connection wrapper.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    pool: SqlitePool,
}

impl SettingsStore {
    /// Single-operator tool, and `sqlite::memory:` databases are
    /// per-connection; one connection serves both cases.
    const DEFAULT_POOL_SIZE: u32 = 1;

    /// Connect to a SQLite settings database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(Self::DEFAULT_POOL_SIZE)
            .connect_with(options)
            .await?;

        tracing::info!("Connected to settings store: {}", url);

        Ok(Self { pool })
    }

    /// Run settings migrations.
    ///
    /// This should be called once after connecting to ensure the schema
    /// is up to date.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SettingsStore {
        let db = SettingsStore::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let db = memory_store().await;

        let value = store::get(db.pool(), keys::NOTION_API_KEY).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let db = memory_store().await;

        store::set(db.pool(), keys::NOTION_NAME_COLUMN, "Clients")
            .await
            .unwrap();

        let value = store::get(db.pool(), keys::NOTION_NAME_COLUMN)
            .await
            .unwrap();
        assert_eq!(value.as_deref(), Some("Clients"));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let db = memory_store().await;

        store::set(db.pool(), keys::DATA_SOURCE, "notion")
            .await
            .unwrap();
        store::set(db.pool(), keys::DATA_SOURCE, "airtable")
            .await
            .unwrap();

        let value = store::get(db.pool(), keys::DATA_SOURCE).await.unwrap();
        assert_eq!(value.as_deref(), Some("airtable"));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let db = memory_store().await;

        store::set(db.pool(), keys::AIRTABLE_PAT, "pat_123")
            .await
            .unwrap();
        store::remove(db.pool(), keys::AIRTABLE_PAT).await.unwrap();
        store::remove(db.pool(), keys::AIRTABLE_PAT).await.unwrap();

        let value = store::get(db.pool(), keys::AIRTABLE_PAT).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_contains_all_keys() {
        let db = memory_store().await;

        store::set(db.pool(), keys::DATA_SOURCE, "airtable")
            .await
            .unwrap();
        store::set(db.pool(), keys::AIRTABLE_BASE_ID, "appXYZ")
            .await
            .unwrap();

        let snapshot = store::snapshot(db.pool()).await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.get(keys::AIRTABLE_BASE_ID).map(String::as_str),
            Some("appXYZ")
        );
    }
}
