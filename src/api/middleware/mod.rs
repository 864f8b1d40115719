//! HTTP middleware for request processing.
//!
//! Provides request tracing, access logging and error rendering.

pub mod access_log;
pub mod error_render;
pub mod tracing;
