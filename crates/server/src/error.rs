//! Per-request error types.

use thiserror::Error;

/// Error raised while resolving or serving a static asset.
///
/// Variants map to the HTTP status codes returned to callers:
/// - [`ServeError::NotFound`] → 404
/// - [`ServeError::Forbidden`] → 403
/// - [`ServeError::Internal`] → 500
///
/// Startup failures (configuration, certificate material) never take this
/// form; they abort the process via `anyhow` before the listener binds.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The request path does not resolve to an existing regular file.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request path would escape the static root.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Any other per-request failure (permissions, I/O).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServeError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServeError::NotFound(_) => 404,
            ServeError::Forbidden(_) => 403,
            ServeError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(ServeError::NotFound("x".into()).http_status(), 404);
        assert_eq!(ServeError::Forbidden("x".into()).http_status(), 403);
        assert_eq!(ServeError::Internal("x".into()).http_status(), 500);
    }

    #[test]
    fn display_includes_message() {
        let e = ServeError::Forbidden("path escapes static root".into());
        assert!(e.to_string().contains("path escapes static root"));
    }
}
