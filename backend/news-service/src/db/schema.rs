use sqlx::MySqlPool;
use tracing::info;

use super::StoreError;

/// Ensure the news tables exist.
///
/// Records are created outside this service, but a fresh database still
/// needs the tables before the first lookup. `news_categories` is
/// provisioned alongside `news` and is not read by any endpoint.
pub async fn ensure_news_tables(pool: &MySqlPool) -> Result<(), StoreError> {
    info!("Ensuring news tables exist");

    sqlx::query(NEWS_TABLE).execute(pool).await?;
    sqlx::query(NEWS_CATEGORIES_TABLE).execute(pool).await?;

    Ok(())
}

const NEWS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS news (
    id BIGINT NOT NULL AUTO_INCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    PRIMARY KEY (id)
) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4
"#;

const NEWS_CATEGORIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS news_categories (
    news_id BIGINT NOT NULL,
    category_id BIGINT NOT NULL,
    PRIMARY KEY (news_id, category_id)
) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4
"#;
