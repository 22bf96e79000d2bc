//! Article database operations

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// Article record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub article_id: i64,
    pub content: String,
}

/// Article repository
pub struct ArticleRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an article by ID
    pub async fn get(&self, article_id: i64) -> Result<Option<Article>> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            SELECT article_id, content
            FROM articles
            WHERE article_id = ?
            "#,
        )
        .bind(article_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(article)
    }

    /// Insert or replace an article
    pub async fn upsert(&self, article_id: i64, content: &str) -> Result<Article> {
        sqlx::query(
            r#"
            INSERT INTO articles (article_id, content)
            VALUES (?, ?)
            ON CONFLICT(article_id) DO UPDATE SET
                content = excluded.content
            "#,
        )
        .bind(article_id)
        .bind(content)
        .execute(self.pool)
        .await?;

        self.get(article_id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("Failed to fetch upserted article".to_string()))
    }
}
