//! PostgreSQL store tests. Require `DATABASE_URL`; run with
//! `cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use slug_shortener::AppError;
use slug_shortener::domain::entities::NewMapping;
use slug_shortener::domain::repositories::MappingRepository;
use slug_shortener::infrastructure::persistence::PgMappingRepository;

fn new_mapping(slug: &str, url: &str) -> NewMapping {
    NewMapping {
        slug: slug.to_string(),
        url: url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let created = repo
        .insert(new_mapping("pg1", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(created.slug, "pg1");
    assert_eq!(created.click, 0);

    let found = repo.find_by_slug("pg1").await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_find_missing(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    assert!(repo.find_by_slug("missing").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_slug_is_conflict(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    repo.ensure_slug_index().await.unwrap();

    repo.insert(new_mapping("dup", "https://first.com"))
        .await
        .unwrap();
    let result = repo.insert(new_mapping("dup", "https://second.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_increment_clicks(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    repo.insert(new_mapping("hits", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(repo.increment_clicks("hits").await.unwrap().unwrap().click, 1);
    assert_eq!(repo.increment_clicks("hits").await.unwrap().unwrap().click, 2);
    assert!(repo.increment_clicks("ghost").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_concurrent_increments(pool: PgPool) {
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    repo.insert(new_mapping("busy", "https://example.com"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.increment_clicks("busy").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(repo.find_by_slug("busy").await.unwrap().unwrap().click, 20);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_stats_and_ping(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    repo.ping().await.unwrap();

    let empty = repo.stats().await.unwrap();
    assert_eq!(empty.mappings, 0);
    assert_eq!(empty.clicks, 0);

    repo.insert(new_mapping("a", "https://a.com")).await.unwrap();
    repo.insert(new_mapping("b", "https://b.com")).await.unwrap();
    repo.increment_clicks("a").await.unwrap();

    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.mappings, 2);
    assert_eq!(stats.clicks, 1);
}
