//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use cssfilter::assets::AssetLoader;
use cssfilter::models::AppConfig;
use cssfilter::server::{build_router, create_app_state, AppState};
use cssfilter::services::SolverService;

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub solver: Arc<SolverService>,
}

impl TestApp {
    /// Create a new test application using the embedded config
    pub fn new() -> Self {
        Self::from_state(create_app_state(&AssetLoader::new(None)))
    }

    /// Create a test application with a shortened schedule
    pub fn quick() -> Self {
        Self::from_state(AppState::new(quick_config()))
    }

    /// Shortened schedule with a small solution cache
    pub fn quick_with_cache_limit(max_entries: usize) -> Self {
        let mut config = quick_config();
        config.server.cache_max_entries = max_entries;
        Self::from_state(AppState::new(config))
    }

    pub fn from_state(state: AppState) -> Self {
        // Keep references for test assertions
        let solver = state.solver.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, solver }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

fn quick_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.solver.wide.iterations = 200;
    config.solver.narrow.iterations = 100;
    config
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
