//! Random slug generation.
//!
//! Slugs are drawn from the URL-safe base64 alphabet (`A-Z a-z 0-9 _ -`),
//! which also satisfies the slug validation rule.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Number of characters in a generated slug.
pub const SLUG_LENGTH: usize = 5;

/// Four random bytes give 32 bits; the first five base64 characters use 30 of
/// them, each carrying a full 6 bits of entropy.
const RANDOM_BYTES: usize = 4;

/// Generates a random 5-character slug.
///
/// Uses `getrandom` for entropy. Uniqueness is probabilistic only; callers
/// must still check the store.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug()?;
/// assert_eq!(slug.len(), 5);
/// ```
pub fn generate_slug() -> Result<String, AppError> {
    let mut buffer = [0u8; RANDOM_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate slug",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let mut slug = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    slug.truncate(SLUG_LENGTH);
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_slug_has_fixed_length() {
        for _ in 0..100 {
            assert_eq!(generate_slug().unwrap().len(), SLUG_LENGTH);
        }
    }

    #[test]
    fn test_generate_slug_url_safe_characters() {
        for _ in 0..100 {
            let slug = generate_slug().unwrap();
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in {slug}"
            );
        }
    }

    #[test]
    fn test_generate_slug_mostly_distinct() {
        // 2^30 possible slugs; 200 draws colliding is vanishingly unlikely.
        let slugs: HashSet<String> = (0..200).map(|_| generate_slug().unwrap()).collect();
        assert!(slugs.len() >= 199);
    }
}
