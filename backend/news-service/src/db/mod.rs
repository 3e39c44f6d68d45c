/// Database access layer
///
/// This module provides:
/// - `NewsStore`: the storage contract the service layer depends on
/// - `MySqlNewsStore`: sqlx-backed implementation
/// - `InMemoryNewsStore`: process-local implementation for local runs and tests
/// - `ensure_news_tables`: startup table provisioning
pub mod memory_store;
pub mod mysql_store;
pub mod schema;

pub use memory_store::InMemoryNewsStore;
pub use mysql_store::MySqlNewsStore;
pub use schema::ensure_news_tables;

use crate::models::NewsRecord;
use async_trait::async_trait;

/// Failure of the underlying persistence layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store call timed out after {0}ms")]
    Timeout(u64),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Keyed storage for news records.
///
/// `upsert` replaces the whole record matching `record.id` and must be
/// atomic per call; writing the same value twice leaves the same state as
/// writing it once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Look up a record; `Ok(None)` when the id does not exist
    async fn get(&self, id: i64) -> Result<Option<NewsRecord>, StoreError>;

    /// Snapshot of every stored record, empty when there are none
    async fn get_all(&self) -> Result<Vec<NewsRecord>, StoreError>;

    /// Insert or fully replace a record, returning what was stored
    async fn upsert(&self, record: NewsRecord) -> Result<NewsRecord, StoreError>;

    /// Readiness probe
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
