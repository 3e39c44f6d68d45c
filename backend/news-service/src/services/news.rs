/// News service - merge-and-save and listing over a `NewsStore`
use crate::db::{NewsStore, StoreError};
use crate::error::{AppError, Result};
use crate::models::{NewsPatch, NewsRecord, NewsView};
use crate::services::listing::project;
use crate::services::merge::apply_partial_update;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Entry point for the HTTP layer.
///
/// Holds no state besides the store handle. Updates are read-then-write
/// with no conditional write, so two concurrent edits of the same id
/// resolve as last-write-wins.
pub struct NewsService {
    store: Arc<dyn NewsStore>,
    store_timeout: Duration,
}

impl NewsService {
    pub fn new(store: Arc<dyn NewsStore>) -> Self {
        Self::with_timeout(store, DEFAULT_STORE_TIMEOUT)
    }

    pub fn with_timeout(store: Arc<dyn NewsStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// Look up `id`, merge `patch` into it and persist the result.
    ///
    /// On any error the stored record is left as it was.
    pub async fn find_and_merge(&self, id: i64, patch: NewsPatch) -> Result<NewsRecord> {
        let existing = self
            .bounded(self.store.get(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("news {}", id)))?;

        let merged = apply_partial_update(existing, patch);
        let saved = self.bounded(self.store.upsert(merged)).await?;

        info!(news_id = id, "News record updated");
        Ok(saved)
    }

    /// Every stored record as an external view, in store order
    pub async fn list_news(&self) -> Result<Vec<NewsView>> {
        let records = self.bounded(self.store.get_all()).await?;
        debug!(count = records.len(), "Listing news records");
        Ok(project(records))
    }

    /// Readiness check against the store
    pub async fn check_ready(&self) -> Result<()> {
        self.bounded(self.store.ping()).await?;
        Ok(())
    }

    async fn bounded<T, F>(&self, call: F) -> std::result::Result<T, StoreError>
    where
        F: Future<Output = std::result::Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.store_timeout.as_millis() as u64)),
        }
    }
}
