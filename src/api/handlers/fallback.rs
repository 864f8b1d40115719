//! Fallbacks for requests no route accepts.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers unmatched paths with the uniform JSON error.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(
        format!("Not Found - {}", uri.path()),
        json!({ "path": uri.path() }),
    )
}

/// Answers a known path requested with an unsupported method.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        format!("Method Not Allowed - {} {}", method, uri.path()),
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
