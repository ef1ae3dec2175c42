use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::ProjectStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory project storage.
    pub projects: Arc<ProjectStore>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            projects: Arc::new(ProjectStore::new()),
        }
    }
}
