//! DTOs for the mapping endpoints.

use serde::Deserialize;

use crate::utils::validation::MappingCandidate;

/// Body of `POST /url`.
///
/// Both fields are optional at the JSON level so that a missing `url` is
/// reported by validation with a rule-specific message.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMappingRequest {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<CreateMappingRequest> for MappingCandidate {
    fn from(request: CreateMappingRequest) -> Self {
        MappingCandidate::new(request.url, request.slug)
    }
}
