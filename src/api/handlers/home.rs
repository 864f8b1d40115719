//! Handler for the service root.

use axum::{Json, http::HeaderMap};

use crate::api::dto::home::HomeResponse;
use crate::utils::host::hostname;

/// Greets the caller with the host name it used.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// { "message": "sho.rt - Shorting your URLs" }
/// ```
///
/// Falls back to `localhost` when the request carries no usable `Host` header.
pub async fn home_handler(headers: HeaderMap) -> Json<HomeResponse> {
    let host = hostname(&headers).unwrap_or_else(|| "localhost".to_string());

    Json(HomeResponse {
        message: format!("{} - Shorting your URLs", host),
    })
}
