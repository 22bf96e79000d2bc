//! Database schema initialization

use sqlx::SqlitePool;

use crate::error::Result;

/// Initialize the database schema
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA_SQL).execute(pool).await?;

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Articles as stored by the publishing side (raw HTML content)
CREATE TABLE IF NOT EXISTS articles (
    article_id INTEGER PRIMARY KEY,
    content TEXT NOT NULL
);

-- Proofreading results produced by the analysis pipeline
CREATE TABLE IF NOT EXISTS proofread_results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    article_id INTEGER,
    -- Error category (grammar, style, ...)
    category TEXT NOT NULL DEFAULT '',
    -- Text covered by the span
    text TEXT NOT NULL DEFAULT '',
    -- Half-open span in code points of the plain text
    start_offset INTEGER NOT NULL,
    end_offset INTEGER NOT NULL,
    -- JSON array of suggestions, or a bare suggestion
    suggestion TEXT NOT NULL DEFAULT '',
    message TEXT NOT NULL DEFAULT '',
    sentence TEXT NOT NULL DEFAULT '',
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_results_article_id ON proofread_results(article_id);
"#;
