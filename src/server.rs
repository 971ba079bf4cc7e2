//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::{AppConfig, ColorReport, FilterReport, FilterValues};
use crate::services::SolverService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cssfilter API",
        description = "CSS filter chains that recolor black elements to any color",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_filter, api::handle_preview),
    components(schemas(FilterReport, ColorReport, FilterValues)),
    tags(
        (name = "Filter", description = "Filter computation and preview")
    )
)]
pub struct ApiDoc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub solver: Arc<SolverService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let cache_capacity = config
            .server
            .cache_solutions
            .then_some(config.server.cache_max_entries);
        let solver = SolverService::new(config.solver.clone(), cache_capacity);
        Self {
            config: Arc::new(config),
            solver: Arc::new(solver),
        }
    }
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: &AssetLoader) -> AppState {
    AppState::new(AppConfig::load_from_assets(asset_loader))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/filter", get(api::handle_filter))
        .route("/api/preview", get(api::handle_preview))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
