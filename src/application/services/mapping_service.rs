//! Mapping creation, lookup and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::slug_generator::generate_slug;
use crate::utils::validation::MappingCandidate;
use serde_json::json;
use tracing::{debug, info};
use validator::Validate;

/// Attempts at drawing an unused random slug before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, reading and resolving mappings.
///
/// Holds the store as an injected trait object so that handlers, the admin
/// CLI and tests can supply any [`MappingRepository`].
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self { repository }
    }

    /// Validates a candidate and stores it as a new mapping.
    ///
    /// # Flow
    ///
    /// 1. Trim and validate the candidate (nothing is written on failure)
    /// 2. Without a slug, generate a random one that is not in use
    /// 3. With a slug, lower-case it and reject it if already taken
    /// 4. Insert with a zero visit counter
    ///
    /// The pre-check gives a clean conflict message; the store's unique
    /// index still rejects a concurrent insert of the same slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the candidate breaks a rule.
    /// Returns [`AppError::Conflict`] if the slug is already in use.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_mapping(&self, candidate: MappingCandidate) -> Result<Mapping, AppError> {
        let candidate = candidate.trimmed();
        candidate.validate()?;

        let MappingCandidate { slug, url } = candidate;
        let url = url.ok_or_else(|| AppError::bad_request("url is a required field", json!({})))?;

        let slug = match slug {
            Some(requested) => {
                let slug = requested.to_lowercase();

                if self.repository.find_by_slug(&slug).await?.is_some() {
                    debug!("Slug {} already in use", slug);
                    return Err(AppError::conflict("Slug in use", json!({ "slug": slug })));
                }

                slug
            }
            None => self.generate_unused_slug().await?,
        };

        let mapping = self.repository.insert(NewMapping { slug, url }).await?;
        info!("Created mapping {} -> {}", mapping.slug, mapping.url);

        Ok(mapping)
    }

    /// Looks up a mapping by exact slug match.
    ///
    /// A missing mapping is not an error here; the read endpoint answers with
    /// JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_mapping(&self, slug: &str) -> Result<Option<Mapping>, AppError> {
        self.repository.find_by_slug(slug).await
    }

    /// Records a visit and returns the mapping to redirect to.
    ///
    /// The counter is incremented by the store in one atomic operation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this slug.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, slug: &str) -> Result<Mapping, AppError> {
        self.repository
            .increment_clicks(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "slug": slug })))
    }

    /// Returns collection-wide figures.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn stats(&self) -> Result<MappingStats, AppError> {
        self.repository.stats().await
    }

    /// Checks that the store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if it does not.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Draws random slugs until one is not taken.
    async fn generate_unused_slug(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let slug = generate_slug()?;

            if self.repository.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique slug",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
