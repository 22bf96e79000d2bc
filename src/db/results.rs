//! Proofreading result database operations

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;
use crate::overlay::{Annotation, Suggestions};

/// Proofreading result record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProofreadResult {
    pub id: i64,
    pub article_id: Option<i64>,
    #[serde(rename = "type")]
    pub category: String,
    pub text: String,
    #[sqlx(rename = "start_offset")]
    pub start: i64,
    #[sqlx(rename = "end_offset")]
    pub end: i64,
    /// JSON array of suggestions as stored
    pub suggestion: String,
    pub message: String,
    pub sentence: String,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}

impl ProofreadResult {
    /// The overlay annotation for this result, with suggestions left raw
    pub fn to_annotation(&self) -> Annotation {
        Annotation {
            category: self.category.clone(),
            start: self.start,
            end: self.end,
            suggestions: Suggestions::Raw(self.suggestion.clone()),
            message: self.message.clone(),
        }
    }
}

/// New proofreading result
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProofreadResult {
    pub category: String,
    pub text: String,
    pub start: i64,
    pub end: i64,
    pub suggestion: String,
    pub message: String,
    pub sentence: String,
}

/// Proofreading result repository
pub struct ProofreadRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProofreadRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List results for an article in span order
    pub async fn list_for_article(&self, article_id: i64) -> Result<Vec<ProofreadResult>> {
        let results = sqlx::query_as::<_, ProofreadResult>(
            r#"
            SELECT id, article_id, category, text, start_offset, end_offset,
                   suggestion, message, sentence, created_at
            FROM proofread_results
            WHERE article_id = ?
            ORDER BY start_offset ASC, id ASC
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// Page through the distinct article IDs that have results
    ///
    /// Returns the IDs on the requested page and the total number of
    /// distinct IDs.
    pub async fn list_article_ids(&self, limit: i64, offset: i64) -> Result<(Vec<i64>, i64)> {
        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(DISTINCT article_id)
            FROM proofread_results
            WHERE article_id IS NOT NULL
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        let ids: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT article_id
            FROM proofread_results
            WHERE article_id IS NOT NULL
            ORDER BY article_id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok((ids.into_iter().map(|(id,)| id).collect(), total))
    }

    /// Every distinct article ID that has results, ascending
    pub async fn all_article_ids(&self) -> Result<Vec<i64>> {
        let ids: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT article_id
            FROM proofread_results
            WHERE article_id IS NOT NULL
            ORDER BY article_id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    /// Record a result for an article
    pub async fn create(
        &self,
        article_id: Option<i64>,
        data: &NewProofreadResult,
    ) -> Result<ProofreadResult> {
        let now = Utc::now().timestamp();

        let result = sqlx::query_as::<_, ProofreadResult>(
            r#"
            INSERT INTO proofread_results (article_id, category, text, start_offset, end_offset,
                                           suggestion, message, sentence, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, article_id, category, text, start_offset, end_offset,
                      suggestion, message, sentence, created_at
            "#,
        )
        .bind(article_id)
        .bind(&data.category)
        .bind(&data.text)
        .bind(data.start)
        .bind(data.end)
        .bind(&data.suggestion)
        .bind(&data.message)
        .bind(&data.sentence)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(result)
    }
}
