//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Message shown for a slug with no mapping.
pub const NOT_FOUND_MESSAGE: &str = "Link not found";

/// Message shown when the store could not be queried.
pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// Redirects a slug to its destination URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Atomically increment the mapping's counter and fetch it
/// 2. Return `302 Found` with the stored URL as `Location`
///
/// # Failures
///
/// Failures are answered with a redirect to the root path carrying an
/// `error` query parameter, not with JSON:
///
/// - unknown slug: `/?error=Link%20not%20found`
/// - store failure: `/?error=Something%20went%20wrong` (logged)
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.mapping_service.resolve(&slug).await {
        Ok(mapping) => {
            debug!("Redirecting {} -> {} (click {})", slug, mapping.url, mapping.click);
            found(&mapping.url)
        }
        Err(AppError::NotFound { .. }) => {
            debug!("No mapping for slug {}", slug);
            found(&error_location(NOT_FOUND_MESSAGE))
        }
        Err(e) => {
            error!("Failed to resolve slug {}: {}", slug, e.stack());
            found(&error_location(FAILURE_MESSAGE))
        }
    }
}

/// `302 Found` pointing at `location`.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Root path with a percent-encoded `error` query parameter.
pub fn error_location(message: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("/?error={}", encoded)
}
