//! Application state management

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::overlay::OverlayRenderer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    db: SqlitePool,
    renderer: OverlayRenderer,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config, db: SqlitePool) -> Self {
        let renderer = OverlayRenderer::new(config.overlay.to_overlay_config());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                db,
                renderer,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the database pool
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get the overlay renderer
    pub fn renderer(&self) -> &OverlayRenderer {
        &self.inner.renderer
    }
}
