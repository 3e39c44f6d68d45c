use super::{NewsStore, StoreError};
use crate::models::NewsRecord;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store keyed by id.
///
/// Listing returns records in ascending id order, matching the MySQL store.
#[derive(Debug, Default)]
pub struct InMemoryNewsStore {
    records: RwLock<BTreeMap<i64, NewsRecord>>,
}

impl InMemoryNewsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`
    pub fn with_records(records: impl IntoIterator<Item = NewsRecord>) -> Self {
        let records = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl NewsStore for InMemoryNewsStore {
    async fn get(&self, id: i64) -> Result<Option<NewsRecord>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<NewsRecord>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn upsert(&self, record: NewsRecord) -> Result<NewsRecord, StoreError> {
        self.records.write().await.insert(record.id, record.clone());
        Ok(record)
    }
}
