//! Mapping API route configuration.

use crate::api::handlers::{create_mapping_handler, get_mapping_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API for mappings.
///
/// # Endpoints
///
/// - `POST /url`          - Create a mapping
/// - `GET  /url/{slug}`   - Read a mapping (JSON `null` when absent)
pub fn mapping_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(create_mapping_handler))
        .route("/url/{slug}", get(get_mapping_handler))
}
