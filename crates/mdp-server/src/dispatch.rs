//! Request dispatch against the current catalog.
//!
//! A request is served from the catalog when its decoded path starts with the
//! configured prefix and the remainder names a catalog key. Everything else is
//! handed to the next handler untouched.

use std::borrow::Cow;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use mdp_catalog::{Catalog, Entry};
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::state::AppState;

/// Outcome of dispatching one request path.
#[derive(Debug, PartialEq)]
pub enum Dispatch<'a> {
    /// Respond with this entry.
    Serve(&'a Entry),
    /// Defer to the next handler.
    Pass,
}

/// JSON envelope for a served entry.
#[derive(Serialize)]
struct EntryResponse<'a> {
    code: u8,
    content: &'a Entry,
}

/// Map a request path to a catalog key.
///
/// The path is percent-decoded first. The raw path is used unchanged if any
/// `%` is not followed by two hex digits or decoding does not yield UTF-8.
/// Returns `None` when a prefix is set and the path does not start with it.
/// The prefix match is a plain string prefix, so `/docsfoo` matches `/docs`.
#[must_use]
pub fn resolve_key(request_path: &str, url_prefix: Option<&str>) -> Option<String> {
    let decoded = if has_valid_escapes(request_path) {
        percent_decode_str(request_path)
            .decode_utf8()
            .unwrap_or(Cow::Borrowed(request_path))
    } else {
        Cow::Borrowed(request_path)
    };

    let path = match url_prefix {
        Some(prefix) => decoded.strip_prefix(prefix)?,
        None => &*decoded,
    };

    Some(path.strip_prefix('/').unwrap_or(path).to_owned())
}

/// Check that every `%` in `path` starts a two-hex-digit escape.
fn has_valid_escapes(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'%')
        .all(|(i, _)| {
            bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        })
}

/// Decide whether a request path is served from `catalog`.
///
/// `catalog` is `None` until the first build succeeds; every request passes
/// through until then.
#[must_use]
pub fn dispatch<'a>(
    request_path: &str,
    url_prefix: Option<&str>,
    catalog: Option<&'a Catalog>,
) -> Dispatch<'a> {
    let Some(catalog) = catalog else {
        return Dispatch::Pass;
    };

    resolve_key(request_path, url_prefix)
        .and_then(|key| catalog.get(&key))
        .map_or(Dispatch::Pass, Dispatch::Serve)
}

/// Middleware serving catalog entries and deferring everything else.
pub(crate) async fn serve_catalog(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let snapshot = state.store.snapshot();
    let path = request.uri().path().to_owned();

    match dispatch(&path, state.url_prefix.as_deref(), snapshot.as_deref()) {
        Dispatch::Serve(entry) => {
            tracing::debug!(path = %path, "Serving catalog entry");
            Json(EntryResponse {
                code: 0,
                content: entry,
            })
            .into_response()
        }
        Dispatch::Pass => next.run(request).await,
    }
}
