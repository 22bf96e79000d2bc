//! Article JSON API routes

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::ProofreadResult;
use crate::documents::{list_documents, load_all_documents, lookup_document, LoadedDocument};
use crate::error::Result;
use crate::overlay::OverlayRenderer;
use crate::pagination::{pagination_pages, ListParams, PageLink, PageRequest};
use crate::routes::articles::parse_article_id;
use crate::state::AppState;

/// Article list response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleItem>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub pages: Vec<PageLink>,
}

/// Article list item
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleItem {
    pub article_id: i64,
}

/// Article detail response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailResponse {
    pub article_id: i64,
    /// Raw stored content
    pub content: String,
    pub results: Vec<ProofreadResult>,
    /// Plain text with results highlighted, ready to embed as HTML
    pub highlighted_content: String,
}

impl ArticleDetailResponse {
    fn render(document: LoadedDocument, renderer: &OverlayRenderer) -> Self {
        let highlighted_content = renderer.render(&document.text, &document.annotations());

        Self {
            article_id: document.article.article_id,
            content: document.article.content,
            results: document.results,
            highlighted_content,
        }
    }
}

/// Create the articles API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles))
        .route("/all", get(all_articles))
        .route("/:id", get(get_article))
}

/// List articles with results
async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ArticleListResponse>> {
    let page = list_documents(state.db(), PageRequest::from(&params)).await?;

    Ok(Json(ArticleListResponse {
        articles: page
            .ids
            .iter()
            .map(|&article_id| ArticleItem { article_id })
            .collect(),
        pages: pagination_pages(page.page, page.total_pages),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
    }))
}

/// Get an article with its highlighted content
async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleDetailResponse>> {
    let article_id = parse_article_id(&id)?;
    let document = lookup_document(state.db(), article_id).await?;

    Ok(Json(ArticleDetailResponse::render(document, state.renderer())))
}

/// Every article with results, highlighted
async fn all_articles(State(state): State<AppState>) -> Result<Json<Vec<ArticleDetailResponse>>> {
    let documents = load_all_documents(state.db()).await?;

    Ok(Json(
        documents
            .into_iter()
            .map(|document| ArticleDetailResponse::render(document, state.renderer()))
            .collect(),
    ))
}
