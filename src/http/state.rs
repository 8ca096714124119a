use std::path::Path;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state injected into all route handlers via axum::extract::State.
/// Built once at startup and never mutated, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn media_dir(&self) -> &Path {
        &self.config.media_dir
    }
}
