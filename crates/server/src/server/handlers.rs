//! Axum request handlers.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use super::state::AppState;
use crate::assets;
use crate::error::ServeError;

/// Fixed body returned for the exact root path.
pub const INDEX_BODY: &str = "<p>This server serves up static files.</p>";

/// `GET /` — fixed informational HTML fragment, regardless of query string
/// or headers.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_BODY)
}

/// Fallback handler — every path other than `/` is a static asset lookup
/// under the configured root.
pub async fn static_asset(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, "405 Method Not Allowed").into_response();
    }

    match assets::resolve(&state.static_root, uri.path()).await {
        Ok(asset) => {
            // HEAD is answered with headers only.
            let body = if method == Method::HEAD {
                Vec::new()
            } else {
                asset.content
            };
            ([(header::CONTENT_TYPE, asset.content_type)], body).into_response()
        }
        Err(err) => error_response(&err, uri.path()),
    }
}

/// Map a [`ServeError`] to its status code and a plain-text body. Traversal
/// and internal failures are logged; plain 404s are not.
fn error_response(err: &ServeError, path: &str) -> Response {
    match err {
        ServeError::NotFound(_) => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
        ServeError::Forbidden(_) => {
            warn!(path, "path traversal attempt blocked");
            (StatusCode::FORBIDDEN, "403 Forbidden").into_response()
        }
        ServeError::Internal(_) => {
            warn!(path, error = %err, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "500 Internal Server Error",
            )
                .into_response()
        }
    }
}
