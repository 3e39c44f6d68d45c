//! Store doubles for HTTP tests
//!
//! `FlakyNewsStore` wraps the in-memory store and fails selected operations,
//! so tests can check both the response and that nothing was written.
#![allow(dead_code)]

use async_trait::async_trait;
use news_service::db::{InMemoryNewsStore, NewsStore, StoreError};
use news_service::models::NewsRecord;

#[derive(Default)]
pub struct FlakyNewsStore {
    inner: InMemoryNewsStore,
    fail_get: bool,
    fail_get_all: bool,
    fail_upsert: bool,
    fail_ping: bool,
}

impl FlakyNewsStore {
    pub fn with_records(records: impl IntoIterator<Item = NewsRecord>) -> Self {
        Self {
            inner: InMemoryNewsStore::with_records(records),
            ..Self::default()
        }
    }

    pub fn failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    pub fn failing_get_all(mut self) -> Self {
        self.fail_get_all = true;
        self
    }

    pub fn failing_upsert(mut self) -> Self {
        self.fail_upsert = true;
        self
    }

    pub fn failing_ping(mut self) -> Self {
        self.fail_ping = true;
        self
    }

    /// Contents of the wrapped store, bypassing injected failures
    pub async fn snapshot(&self) -> Vec<NewsRecord> {
        self.inner.get_all().await.unwrap()
    }
}

fn injected(op: &str) -> StoreError {
    StoreError::Unavailable(format!("injected {} failure", op))
}

#[async_trait]
impl NewsStore for FlakyNewsStore {
    async fn get(&self, id: i64) -> Result<Option<NewsRecord>, StoreError> {
        if self.fail_get {
            return Err(injected("get"));
        }
        self.inner.get(id).await
    }

    async fn get_all(&self) -> Result<Vec<NewsRecord>, StoreError> {
        if self.fail_get_all {
            return Err(injected("get_all"));
        }
        self.inner.get_all().await
    }

    async fn upsert(&self, record: NewsRecord) -> Result<NewsRecord, StoreError> {
        if self.fail_upsert {
            return Err(injected("upsert"));
        }
        self.inner.upsert(record).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail_ping {
            return Err(injected("ping"));
        }
        Ok(())
    }
}
