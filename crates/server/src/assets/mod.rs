//! Static asset resolution.
//!
//! Maps `(static root, request path)` to file bytes and a Content-Type, or a
//! typed [`ServeError`]. Resolution is a pure function of the filesystem: no
//! caching, no indexing, every request hits the disk. Traversal sanitization
//! is explicit — a rejected component scan first, then a canonical-path
//! prefix check that also covers symlinks pointing outside the root.

pub mod mime;

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tokio::fs;

use crate::error::ServeError;

/// File name tried when a request path resolves to a directory.
const INDEX_FILE: &str = "index.html";

/// A resolved static asset, ready to be written into a response body.
#[derive(Debug)]
pub struct StaticAsset {
    pub content: Vec<u8>,
    pub content_type: &'static str,
}

/// Resolve `request_path` to a regular file under `root` and read it.
///
/// The request path is taken verbatim (no percent-decoding), so encoded
/// traversal sequences never turn into `..` here.
///
/// # Errors
///
/// - [`ServeError::Forbidden`] if the path would escape the root.
/// - [`ServeError::NotFound`] if no regular file exists at the path.
/// - [`ServeError::Internal`] for any other I/O failure.
pub async fn resolve(root: &Path, request_path: &str) -> Result<StaticAsset, ServeError> {
    let relative = request_path.trim_start_matches('/');
    reject_escaping_components(relative, request_path)?;

    let root_canonical = fs::canonicalize(root)
        .await
        .map_err(|e| io_error(e, root))?;

    let mut file_path =
        canonicalize_within(root_canonical.join(relative), &root_canonical, request_path).await?;

    if file_path.is_dir() {
        // The index file may itself be a symlink; resolve and re-check containment.
        file_path =
            canonicalize_within(file_path.join(INDEX_FILE), &root_canonical, request_path).await?;
    }
    if !file_path.is_file() {
        return Err(ServeError::NotFound(request_path.to_owned()));
    }

    let content = fs::read(&file_path)
        .await
        .map_err(|e| io_error(e, &file_path))?;
    let content_type = mime::content_type_for(&file_path);

    Ok(StaticAsset {
        content,
        content_type,
    })
}

/// Reject request paths containing components that could climb out of the
/// root (`..`, a fresh root, or a Windows prefix) before touching the disk.
fn reject_escaping_components(relative: &str, request_path: &str) -> Result<(), ServeError> {
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ServeError::Forbidden(format!(
                    "{request_path} contains a path-escaping component"
                )));
            }
        }
    }
    Ok(())
}

/// Resolve `candidate` to its canonical form and require it to stay inside
/// `root`. Symlinks may resolve anywhere; only paths still inside the root
/// are served.
///
/// Any canonicalisation failure other than a permission error means there is
/// no regular file at the request path — a dangling name, or an existing
/// file used as a directory (`/hello.txt/extra`) — and maps to 404.
async fn canonicalize_within(
    candidate: PathBuf,
    root: &Path,
    request_path: &str,
) -> Result<PathBuf, ServeError> {
    let resolved = fs::canonicalize(&candidate).await.map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => {
            ServeError::Internal(format!("{}: {e}", candidate.display()))
        }
        _ => ServeError::NotFound(request_path.to_owned()),
    })?;

    if !resolved.starts_with(root) {
        return Err(ServeError::Forbidden(format!(
            "{request_path} resolves outside the static root"
        )));
    }
    Ok(resolved)
}

fn io_error(e: std::io::Error, path: &Path) -> ServeError {
    match e.kind() {
        ErrorKind::NotFound => ServeError::NotFound(path.display().to_string()),
        _ => ServeError::Internal(format!("{}: {e}", path.display())),
    }
}
