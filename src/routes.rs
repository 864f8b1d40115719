//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Greeting with the requested host name
//! - `GET  /health`       - Mapping store health check
//! - `POST /url`          - Create a mapping
//! - `GET  /url/{slug}`   - Read a mapping
//! - `GET  /{slug}`       - Redirect to the mapping's URL
//! - `/static/*`          - Static assets
//!
//! Any other path is answered with a JSON 404, and a known path requested
//! with the wrong method with a JSON 405.
//!
//! # Middleware
//!
//! - **Error rendering** - Hides error stacks in production mode
//! - **Access log** - One line per request
//! - **Tracing** - Request spans
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    health_handler, home_handler, method_not_allowed_handler, not_found_handler, redirect_handler,
};
use crate::api::middleware::{access_log, error_render, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::mapping_routes())
        .route("/{slug}", get(redirect_handler))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(middleware::from_fn_with_state(
            state.runtime_mode,
            error_render::layer,
        ))
        .layer(middleware::from_fn(access_log::layer))
        .layer(tracing::layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// [`build_router`] with trailing slashes trimmed before routing, so that
/// `/abc12/` resolves like `/abc12`.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, static_dir))
}
