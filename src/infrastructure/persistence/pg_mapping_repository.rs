//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Uniqueness of slugs is enforced by the `urls_slug_key` index, so a racing
/// insert surfaces as [`AppError::Conflict`] instead of a duplicate row.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn ensure_slug_index(&self) -> Result<(), AppError> {
        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS urls_slug_key ON urls (slug)")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Mapping>, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, slug, url, click, created_at
            FROM urls
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO urls (slug, url, click)
            VALUES ($1, $2, 0)
            RETURNING id, slug, url, click, created_at
            "#,
        )
        .bind(&new_mapping.slug)
        .bind(&new_mapping.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn increment_clicks(&self, slug: &str) -> Result<Option<Mapping>, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            UPDATE urls
            SET click = click + 1
            WHERE slug = $1
            RETURNING id, slug, url, click, created_at
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn stats(&self) -> Result<MappingStats, AppError> {
        let (mappings, clicks): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*)::bigint, COALESCE(SUM(click), 0)::bigint FROM urls",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(MappingStats { mappings, clicks })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
