//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

/// State shared across all handlers. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Message returned in the `/api` status document.
    pub api_message: Arc<str>,
    /// Directory holding the compiled page, if any.
    pub dist_dir: Option<Arc<PathBuf>>,
}

impl AppState {
    pub fn new(api_message: impl Into<Arc<str>>) -> Self {
        Self {
            api_message: api_message.into(),
            dist_dir: None,
        }
    }

    /// Serve static files from `dir` for every path not handled by a route.
    #[must_use]
    pub fn with_dist_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = Some(Arc::new(dir.into()));
        self
    }
}
