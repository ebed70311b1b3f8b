//! Application state.
//!
//! Shared state for the catalog middleware.

use std::sync::Arc;

use mdp_catalog::CatalogStore;

/// State shared by every request passing through the catalog middleware.
pub(crate) struct AppState {
    /// Current catalog snapshot holder.
    pub(crate) store: Arc<CatalogStore>,
    /// Prefix a request path must start with to be served.
    pub(crate) url_prefix: Option<String>,
}
