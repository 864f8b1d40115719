//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod home;
pub mod mappings;
pub mod redirect;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use home::home_handler;
pub use mappings::{create_mapping_handler, get_mapping_handler};
pub use redirect::redirect_handler;
