//! Static file serving module
//!
//! The whole serving contract lives here: `/` maps to `/index.html`, the
//! normalized target must stay under the root (403 otherwise), missing files
//! and directories are 404, and everything else is the file's bytes with a
//! Content-Type looked up from the extension.

use crate::http::{self, mime};
use crate::logger;
use crate::server::ServerContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Outcome of mapping a URL path onto the serving root.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The normalized path escapes the root. Rejected before any
    /// filesystem lookup.
    Forbidden,
    /// The target does not exist, or names a directory.
    NotFound,
    /// An existing regular file under the root.
    File(PathBuf),
}

/// Main entry point for HTTP request handling
///
/// The method is informational only; non-GET requests are resolved the same
/// way. hyper suppresses response bodies for HEAD on its own.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    ctx: Arc<ServerContext>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = match resolve(&ctx.root, &path) {
        Resolution::Forbidden => {
            logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
            http::build_403_response()
        }
        Resolution::NotFound => http::build_404_response(),
        Resolution::File(file_path) => serve_file(&file_path).await,
    };

    if ctx.access_log {
        let bytes = hyper::body::Body::size_hint(response.body())
            .exact()
            .unwrap_or(0);
        logger::log_access(&method, &path, response.status().as_u16(), bytes as usize);
    }

    Ok(response)
}

/// Resolve a URL path against the serving root.
///
/// Normalization is lexical: `.` segments are dropped and `..` pops one
/// segment, never climbing above the filesystem root. The traversal guard is
/// a textual prefix check against the root, applied before any existence
/// check, so probes outside the root are 403 whether or not the target
/// exists.
pub fn resolve(root: &Path, url_path: &str) -> Resolution {
    let url_path = if url_path == "/" { "/index.html" } else { url_path };
    let joined = root.join(url_path.trim_start_matches('/'));
    let resolved = normalize(&joined);

    if !resolved.starts_with(root) {
        return Resolution::Forbidden;
    }

    if !resolved.exists() || resolved.is_dir() {
        return Resolution::NotFound;
    }

    Resolution::File(resolved)
}

/// Lexically normalize a path without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() is a no-op at the filesystem root, which clamps
                // runaway `..` sequences there.
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Read a resolved file and build the 200 response.
async fn serve_file(file_path: &Path) -> Response<Full<Bytes>> {
    match fs::read(file_path).await {
        Ok(content) => {
            let content_type =
                mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
            http::build_file_response(content, content_type)
        }
        Err(e) => {
            // Unreadable, or vanished between the existence check and the
            // read. Folded into 404 so filesystem detail stays server-side.
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            http::build_404_response()
        }
    }
}
