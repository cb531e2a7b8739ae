//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::jobs::JobOrchestrator;
use crate::storage::LocalStorage;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so every actix worker sees the same
/// orchestrator, and therefore the same job slot.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Job runner and current-job slot
    pub orchestrator: Arc<JobOrchestrator>,
    /// Artifact storage
    pub storage: Arc<LocalStorage>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, orchestrator: JobOrchestrator, storage: Arc<LocalStorage>) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            storage,
        }
    }
}
