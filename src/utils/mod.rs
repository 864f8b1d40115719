//! Helpers used across the application:
//!
//! - [`slug_generator`] - Random slug generation
//! - [`validation`] - Creation input rules
//! - [`host`] - Host name extraction from HTTP headers

pub mod host;
pub mod slug_generator;
pub mod validation;
