//! One-line access log per request.

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

/// Logs `ip "METHOD path" status - ms` for every request.
///
/// ```text
/// INFO 127.0.0.1 "GET /abc12" 302 - 1ms
/// ```
///
/// The peer address is taken from [`ConnectInfo`] when the server provides
/// it and shown as `-` otherwise (e.g. under test servers).
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        r#"{ip} "{method} {path}" {status} - {ms}ms"#,
        ip = ip,
        method = method,
        path = path,
        status = response.status().as_u16(),
        ms = start.elapsed().as_millis(),
    );

    response
}
