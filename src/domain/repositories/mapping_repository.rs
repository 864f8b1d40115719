//! Repository trait for mapping data access.

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for slug to URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Ensures lookups by slug are indexed and slugs are unique.
    ///
    /// Idempotent; called once at startup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn ensure_slug_index(&self) -> Result<(), AppError>;

    /// Finds a mapping by exact slug match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Mapping>, AppError>;

    /// Inserts a new mapping with a zero visit counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Atomically adds one to the visit counter of a mapping.
    ///
    /// Returns the updated mapping, or `Ok(None)` when no mapping has this slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, slug: &str) -> Result<Option<Mapping>, AppError>;

    /// Counts mappings and sums their visit counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn stats(&self) -> Result<MappingStats, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
