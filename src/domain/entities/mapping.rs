//! Mapping entity: a slug pointing at a destination URL.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored slug to URL mapping with its visit counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Mapping {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub click: i64,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, slug: String, url: String, click: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug,
            url,
            click,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
///
/// The store always starts the counter at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub slug: String,
    pub url: String,
}

/// Aggregate figures over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MappingStats {
    pub mappings: i64,
    pub clicks: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = Mapping::new(
            1,
            "abc12".to_string(),
            "https://example.com".to_string(),
            0,
            now,
        );

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.slug, "abc12");
        assert_eq!(mapping.url, "https://example.com");
        assert_eq!(mapping.click, 0);
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_mapping_serializes_all_fields() {
        let mapping = Mapping::new(
            7,
            "docs".to_string(),
            "https://docs.rs".to_string(),
            3,
            Utc::now(),
        );

        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["slug"], "docs");
        assert_eq!(json["url"], "https://docs.rs");
        assert_eq!(json["click"], 3);
        assert!(json["created_at"].is_string());
    }
}
