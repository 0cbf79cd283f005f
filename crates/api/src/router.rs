//! Axum router configuration for the Newslens HTTP API.

use crate::{config::ApiConfig, dispatch::Dispatcher};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the main API router.
pub fn build_router(config: &ApiConfig, dispatcher: Arc<Dispatcher>) -> Router {
    let mut router = Router::new().nest("/api", crate::analyze::router(dispatcher));

    // Add health check endpoint
    router = router.route("/health", axum::routing::get(health_check));

    // Add CORS layer if enabled
    if config.enable_cors {
        router = router.layer(create_cors_layer(config));
    }

    router
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Create CORS layer based on configuration.
fn create_cors_layer(config: &ApiConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_allowed_origins.is_empty() {
        cors = cors.allow_origin(tower_http::cors::Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        // Credentials are only allowed with an explicit origin list.
        cors = cors.allow_origin(origins).allow_credentials(true);
    }

    cors.allow_methods([
        axum::http::Method::GET,
        axum::http::Method::POST,
        axum::http::Method::OPTIONS,
    ])
    .allow_headers([
        axum::http::header::CONTENT_TYPE,
        axum::http::header::ACCEPT,
    ])
}
