//! DTO for the root endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
}
