//! Uniform rendering of error responses.
//!
//! Handlers return [`AppError`](crate::error::AppError), which renders
//! `{message, stack}` with a diagnostic stack and attaches an
//! [`ErrorReport`]. In production mode this middleware replaces the stack with
//! [`PRODUCTION_STACK`] so internals are not exposed.

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::RuntimeMode;
use crate::error::{ErrorBody, ErrorReport};

/// Placeholder emitted instead of the stack in production mode.
pub const PRODUCTION_STACK: &str = "😁";

pub async fn layer(State(mode): State<RuntimeMode>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if !mode.is_production() {
        return response;
    }

    match response.extensions().get::<ErrorReport>().cloned() {
        Some(report) => {
            let body = ErrorBody {
                message: report.message.clone(),
                stack: PRODUCTION_STACK.to_string(),
            };
            let mut rendered = (report.status, Json(body)).into_response();
            rendered.extensions_mut().insert(report);
            rendered
        }
        None => response,
    }
}
