//! Article pages
//!
//! HTML list, flat and detail views. The flat and detail views embed the
//! overlay output verbatim; it is already escaped.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::documents::{list_documents, load_all_documents, lookup_document, LoadedDocument};
use crate::error::{AppError, Result};
use crate::html::pages;
use crate::pagination::{pagination_pages, ListParams, PageRequest};
use crate::state::AppState;

/// Create the article pages router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles))
        .route("/all", get(all_articles))
        .route("/:id", get(article_detail))
}

/// Redirect the site root to the article list
pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/articles")])
}

/// Paginated list of articles with results
async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>> {
    let page = list_documents(state.db(), PageRequest::from(&params)).await?;
    let links = pagination_pages(page.page, page.total_pages);
    Ok(Html(pages::list_page(&page, &links)))
}

/// Every article with results, highlighted on one page
async fn all_articles(State(state): State<AppState>) -> Result<Html<String>> {
    let documents = load_all_documents(state.db()).await?;

    let renderer = state.renderer();
    let articles: Vec<(LoadedDocument, String)> = documents
        .into_iter()
        .map(|document| {
            let highlighted = renderer.render(&document.text, &document.annotations());
            (document, highlighted)
        })
        .collect();

    Ok(Html(pages::all_page(&articles, &renderer.config().classes)))
}

/// One article with its results highlighted
async fn article_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let article_id = parse_article_id(&id)?;
    let document = lookup_document(state.db(), article_id).await?;

    let renderer = state.renderer();
    let highlighted = renderer.render(&document.text, &document.annotations());

    Ok(Html(pages::detail_page(
        &document,
        &highlighted,
        &renderer.config().classes,
    )))
}

/// Parse an article ID path segment
pub fn parse_article_id(id: &str) -> Result<i64> {
    id.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid article id: {}", id)))
}
