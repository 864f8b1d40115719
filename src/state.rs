//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::config::RuntimeMode;
use crate::domain::repositories::MappingRepository;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub runtime_mode: RuntimeMode,
}

impl AppState {
    /// Builds the state around a mapping store.
    pub fn new(repository: Arc<dyn MappingRepository>, runtime_mode: RuntimeMode) -> Self {
        Self {
            mapping_service: Arc::new(MappingService::new(repository)),
            runtime_mode,
        }
    }
}
