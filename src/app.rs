//! Application state and HTTP router construction.
//!
//! Used by [main] and by the integration tests to build the Axum app.

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::Config;
use crate::db::Database;
use crate::services::CatalogService;

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(config: &Config, db: Database) -> Self {
        let catalog = CatalogService::new(db.clone(), config.page_size);
        Self { db, catalog }
    }
}

/// Build the full Axum router: catalog routes, health routes and layers.
/// Returns Router<()> (state fully applied) for use with axum::serve.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(api::health::router())
        .merge(api::router())
        .layer(CatchPanicLayer::custom(api::error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
