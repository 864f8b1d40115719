//! Core domain entities.
//!
//! The service has a single entity, [`Mapping`]. Creation goes through
//! [`NewMapping`], which carries only the fields a caller may choose.

pub mod mapping;

pub use mapping::{Mapping, MappingStats, NewMapping};
