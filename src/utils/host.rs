//! Host name extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Returns the host name from the `Host` header with any port removed.
///
/// Bracketed IPv6 literals keep their brackets (`[::1]:8080` gives `[::1]`).
/// Returns `None` when the header is missing, not valid UTF-8, or empty.
pub fn hostname(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?.trim();

    let name = match host.strip_prefix('[') {
        Some(rest) => match rest.find(']') {
            Some(end) => &host[..end + 2],
            None => host,
        },
        None => host.split(':').next().unwrap_or(host),
    };

    (!name.is_empty()).then(|| name.to_string())
}
