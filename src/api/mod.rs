//! HTTP layer: translates requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, access log and error rendering
//! - [`routes`] - Mapping API route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
