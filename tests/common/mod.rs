#![allow(dead_code)]

use axum_test::TestServer;
use slug_shortener::config::RuntimeMode;
use slug_shortener::domain::entities::{Mapping, NewMapping};
use slug_shortener::domain::repositories::MappingRepository;
use slug_shortener::infrastructure::persistence::MemoryMappingRepository;
use slug_shortener::routes::build_router;
use slug_shortener::state::AppState;
use std::sync::Arc;

pub fn create_test_state(mode: RuntimeMode) -> (AppState, Arc<MemoryMappingRepository>) {
    let repo = Arc::new(MemoryMappingRepository::new());
    let state = AppState::new(repo.clone(), mode);
    (state, repo)
}

/// Full application router over an in-memory store.
pub fn create_test_server(mode: RuntimeMode) -> (TestServer, Arc<MemoryMappingRepository>) {
    let (state, repo) = create_test_state(mode);
    let server = TestServer::new(build_router(state, "public")).unwrap();
    (server, repo)
}

pub async fn create_test_mapping(repo: &MemoryMappingRepository, slug: &str, url: &str) -> Mapping {
    repo.insert(NewMapping {
        slug: slug.to_string(),
        url: url.to_string(),
    })
    .await
    .unwrap()
}

/// Store whose every operation fails, for exercising error paths.
pub struct FailingRepository;

#[async_trait::async_trait]
impl MappingRepository for FailingRepository {
    async fn ensure_slug_index(&self) -> Result<(), slug_shortener::AppError> {
        Err(unavailable())
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Mapping>, slug_shortener::AppError> {
        Err(unavailable())
    }

    async fn insert(&self, _new_mapping: NewMapping) -> Result<Mapping, slug_shortener::AppError> {
        Err(unavailable())
    }

    async fn increment_clicks(
        &self,
        _slug: &str,
    ) -> Result<Option<Mapping>, slug_shortener::AppError> {
        Err(unavailable())
    }

    async fn stats(
        &self,
    ) -> Result<slug_shortener::domain::entities::MappingStats, slug_shortener::AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), slug_shortener::AppError> {
        Err(unavailable())
    }
}

fn unavailable() -> slug_shortener::AppError {
    slug_shortener::AppError::internal(
        "Database error",
        serde_json::json!({ "reason": "connection refused" }),
    )
}

pub fn create_failing_server(mode: RuntimeMode) -> TestServer {
    let state = AppState::new(Arc::new(FailingRepository), mode);
    TestServer::new(build_router(state, "public")).unwrap()
}
