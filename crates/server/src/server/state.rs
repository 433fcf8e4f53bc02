//! Shared application state injected into every Axum handler.

use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across all request handlers.
///
/// The static root is the only shared value and is read-only after startup,
/// so the state is a cheap `Arc` clone per request with no synchronisation.
#[derive(Clone)]
pub struct AppState {
    /// Directory whose contents are served verbatim by relative path.
    pub static_root: Arc<PathBuf>,
}

impl AppState {
    /// Create a new [`AppState`] rooted at `static_root`.
    pub fn new(static_root: impl Into<PathBuf>) -> Self {
        Self {
            static_root: Arc::new(static_root.into()),
        }
    }
}
