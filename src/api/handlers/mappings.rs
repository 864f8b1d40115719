//! Handlers for creating and reading mappings.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::json;

use crate::api::dto::mapping::CreateMappingRequest;
use crate::domain::entities::Mapping;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping from a slug (optional) and a destination URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "slug": "docs", "url": "https://docs.rs" }
/// ```
///
/// Without `slug` a random 5-character slug is generated.
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "slug": "docs",
///   "url": "https://docs.rs",
///   "click": 0,
///   "created_at": "2026-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON or a field breaks a validation rule
/// - 409 if the slug is already in use
/// - 500 on storage errors
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMappingRequest>, JsonRejection>,
) -> Result<Json<Mapping>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request(
            rejection.body_text(),
            json!({ "status": rejection.status().as_u16() }),
        )
    })?;

    let mapping = state
        .mapping_service
        .create_mapping(request.into())
        .await?;

    Ok(Json(mapping))
}

/// Returns the mapping for a slug, or JSON `null` if there is none.
///
/// # Endpoint
///
/// `GET /url/{slug}`
///
/// A missing mapping is not an HTTP error: the response is `200 OK` with a
/// `null` body.
///
/// # Errors
///
/// Returns 500 on storage errors.
pub async fn get_mapping_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Option<Mapping>>, AppError> {
    let mapping = state.mapping_service.find_mapping(&slug).await?;
    Ok(Json(mapping))
}
