//! Route modules for Proofread Viewer

pub mod api;
pub mod articles;
pub mod health;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(articles::index))
        .nest("/health", health::router())
        .nest("/api/v1/health", health::router())
        .nest("/articles", articles::router())
        .nest("/api/v1/articles", api::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
