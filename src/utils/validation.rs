//! Validation of mapping creation input.
//!
//! # Rules
//!
//! - `url` is required and must parse as an absolute `http`, `https` or `ftp`
//!   URL with a host
//! - `slug` is optional; when present it must consist only of letters,
//!   digits, underscores and hyphens, be at most 64 characters long, and not
//!   be a reserved path segment
//!
//! Both fields are whitespace-trimmed before the rules are applied.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;
use validator::{Validate, ValidationError};

/// Whole-string slug pattern: ASCII letters, digits, underscores and hyphens.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("slug pattern is valid"));

/// Path segments claimed by other routes.
///
/// A mapping with one of these slugs could never be reached through `GET /{slug}`.
pub const RESERVED_SLUGS: &[&str] = &["url", "static", "health"];

/// Schemes a destination URL may use.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Maximum length of a slug.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Candidate `{slug?, url}` pair for a new mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct MappingCandidate {
    #[validate(
        length(max = 64, message = "slug must be at most 64 characters"),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(
        required(message = "url is a required field"),
        custom(function = "validate_url")
    )]
    pub url: Option<String>,
}

impl MappingCandidate {
    pub fn new(url: Option<String>, slug: Option<String>) -> Self {
        Self { slug, url }
    }

    /// Returns the candidate with both fields whitespace-trimmed.
    pub fn trimmed(self) -> Self {
        Self {
            slug: self.slug.map(|s| s.trim().to_string()),
            url: self.url.map(|u| u.trim().to_string()),
        }
    }
}

fn validate_url(raw: &str) -> Result<(), ValidationError> {
    let usable = Url::parse(raw).is_ok_and(|url| {
        ALLOWED_SCHEMES.contains(&url.scheme()) && url.host_str().is_some_and(|h| !h.is_empty())
    });

    if usable {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message(Cow::Borrowed("url must be a valid URL")))
    }
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if !SLUG_REGEX.is_match(slug) {
        return Err(ValidationError::new("slug_format").with_message(Cow::Borrowed(
            "slug must contain only letters, digits, underscores and hyphens",
        )));
    }

    if RESERVED_SLUGS.contains(&slug.to_lowercase().as_str()) {
        return Err(ValidationError::new("slug_reserved").with_message(Cow::Borrowed("slug is reserved")));
    }

    Ok(())
}
