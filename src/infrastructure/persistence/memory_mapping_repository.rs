//! In-process mapping repository.
//!
//! Keeps mappings in a `HashMap` behind a mutex. Used for local development
//! (`STORAGE_BACKEND=memory`) and for handler tests that do not need a
//! database. Every operation holds the lock for its whole duration, so
//! inserts and counter increments are atomic just like the PostgreSQL store.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    by_slug: HashMap<String, Mapping>,
}

/// Mapping store that lives in process memory and is lost on restart.
#[derive(Default)]
pub struct MemoryMappingRepository {
    inner: Mutex<Inner>,
}

impl MemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Mapping store lock poisoned", json!({})))
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn ensure_slug_index(&self) -> Result<(), AppError> {
        // Keys of the map are the index.
        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Mapping>, AppError> {
        Ok(self.lock()?.by_slug.get(slug).cloned())
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mut inner = self.lock()?;

        if inner.by_slug.contains_key(&new_mapping.slug) {
            return Err(AppError::conflict(
                "Slug in use",
                json!({ "slug": new_mapping.slug }),
            ));
        }

        inner.next_id += 1;
        let mapping = Mapping::new(
            inner.next_id,
            new_mapping.slug,
            new_mapping.url,
            0,
            Utc::now(),
        );
        inner
            .by_slug
            .insert(mapping.slug.clone(), mapping.clone());

        Ok(mapping)
    }

    async fn increment_clicks(&self, slug: &str) -> Result<Option<Mapping>, AppError> {
        let mut inner = self.lock()?;

        Ok(inner.by_slug.get_mut(slug).map(|mapping| {
            mapping.click += 1;
            mapping.clone()
        }))
    }

    async fn stats(&self) -> Result<MappingStats, AppError> {
        let inner = self.lock()?;

        Ok(MappingStats {
            mappings: inner.by_slug.len() as i64,
            clicks: inner.by_slug.values().map(|m| m.click).sum(),
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
