//! Document lookup and listing
//!
//! Joins stored articles with their proofreading results and prepares the
//! plain text that result offsets refer to.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::{Article, ArticleRepository, ProofreadRepository, ProofreadResult};
use crate::error::{AppError, Result};
use crate::html::strip_markup;
use crate::overlay::Annotation;
use crate::pagination::PageRequest;

/// An article ready for rendering
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub article: Article,
    pub results: Vec<ProofreadResult>,
    /// Plain text of the article content
    pub text: String,
}

impl LoadedDocument {
    pub fn annotations(&self) -> Vec<Annotation> {
        self.results.iter().map(ProofreadResult::to_annotation).collect()
    }
}

/// One page of article IDs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    pub ids: Vec<i64>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

/// Load an article, its results and its plain text
pub async fn lookup_document(pool: &SqlitePool, article_id: i64) -> Result<LoadedDocument> {
    let article = ArticleRepository::new(pool)
        .get(article_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article not found: {}", article_id)))?;

    let results = ProofreadRepository::new(pool)
        .list_for_article(article_id)
        .await?;

    let text = strip_markup(&article.content)?;
    tracing::debug!(
        "Loaded article {} ({} chars, {} results)",
        article_id,
        text.chars().count(),
        results.len()
    );

    Ok(LoadedDocument {
        article,
        results,
        text,
    })
}

/// Load every article that has proofreading results
///
/// IDs whose article row is missing are skipped.
pub async fn load_all_documents(pool: &SqlitePool) -> Result<Vec<LoadedDocument>> {
    let ids = ProofreadRepository::new(pool).all_article_ids().await?;

    let mut documents = Vec::with_capacity(ids.len());
    for article_id in ids {
        match lookup_document(pool, article_id).await {
            Ok(document) => documents.push(document),
            Err(AppError::NotFound(_)) => {
                tracing::debug!("Skipping results for missing article {}", article_id);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(documents)
}

/// List the IDs of articles that have proofreading results
pub async fn list_documents(pool: &SqlitePool, request: PageRequest) -> Result<DocumentPage> {
    let (ids, total) = ProofreadRepository::new(pool)
        .list_article_ids(request.page_size, request.offset())
        .await?;

    Ok(DocumentPage {
        ids,
        total,
        page: request.page,
        page_size: request.page_size,
        total_pages: request.total_pages(total),
    })
}
