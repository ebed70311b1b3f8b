//! Router construction.
//!
//! Builds the standalone router and layers the catalog middleware onto
//! caller-supplied routers.

use std::sync::Arc;

use axum::Router;
use axum::http::Uri;
use axum::middleware::from_fn_with_state;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::dispatch::serve_catalog;
use crate::error::ServerError;
use crate::state::AppState;

/// Wrap `router` so that catalog entries are served before its routes run.
pub(crate) fn with_catalog<S>(router: Router<S>, state: Arc<AppState>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(state, serve_catalog))
}

/// Create the standalone application router.
///
/// Requests not served from the catalog get a 404.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    with_catalog(Router::new().fallback(not_found), state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_owned())
}
