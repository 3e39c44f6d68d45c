use super::{NewsStore, StoreError};
use crate::models::NewsRecord;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

/// MySQL-backed news store
#[derive(Clone)]
pub struct MySqlNewsStore {
    pool: MySqlPool,
}

impl MySqlNewsStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl NewsStore for MySqlNewsStore {
    async fn get(&self, id: i64) -> Result<Option<NewsRecord>, StoreError> {
        let record = sqlx::query_as::<_, NewsRecord>(
            r#"
            SELECT id, title, content
            FROM news
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn get_all(&self) -> Result<Vec<NewsRecord>, StoreError> {
        let records = sqlx::query_as::<_, NewsRecord>(
            r#"
            SELECT id, title, content
            FROM news
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Single-statement upsert, so concurrent readers never observe a
    /// half-written row.
    async fn upsert(&self, record: NewsRecord) -> Result<NewsRecord, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO news (id, title, content)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                title = VALUES(title),
                content = VALUES(content)
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.content)
        .execute(&self.pool)
        .await?;

        debug!(news_id = record.id, "Upserted news record");
        Ok(record)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
