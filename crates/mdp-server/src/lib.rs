//! HTTP middleware and standalone server for mdp catalogs.
//!
//! The catalog is served as JSON by an axum middleware: a request whose path
//! (after the optional URL prefix) names a catalog key gets
//! `{"code":0,"content":<entry>}`, and every other request continues to the
//! wrapped router.
//!
//! # Embedding
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum::{Router, routing::get};
//! use mdp_catalog::{CatalogBuilder, CatalogStore};
//! use mdp_server::{CatalogMiddleware, spawn_build};
//!
//! let store = Arc::new(CatalogStore::new());
//! spawn_build(Arc::clone(&store), CatalogBuilder::new("docs"));
//!
//! let app = CatalogMiddleware::new(store, Some("/docs".to_owned()))
//!     .apply(Router::new().route("/health", get(|| async { "ok" })));
//! ```
//!
//! # Standalone
//!
//! ```ignore
//! use mdp_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     run_server(ServerConfig::default()).await.unwrap();
//! }
//! ```

mod app;
mod dispatch;
mod error;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use mdp_catalog::{CatalogBuilder, CatalogStore};
use state::AppState;
use tokio::task::JoinHandle;

pub use dispatch::{Dispatch, dispatch, resolve_key};
pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Catalog root directory.
    pub root_dir: PathBuf,
    /// Prefix a request path must start with to be served.
    pub url_prefix: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3003,
            root_dir: PathBuf::from("."),
            url_prefix: None,
        }
    }
}

/// Catalog middleware for an existing axum router.
#[derive(Clone)]
pub struct CatalogMiddleware {
    state: Arc<AppState>,
}

impl CatalogMiddleware {
    /// Create middleware serving entries from `store`.
    ///
    /// `url_prefix` of `None` serves every path.
    #[must_use]
    pub fn new(store: Arc<CatalogStore>, url_prefix: Option<String>) -> Self {
        Self {
            state: Arc::new(AppState { store, url_prefix }),
        }
    }

    /// Layer the middleware onto `router`.
    ///
    /// Catalog entries are answered before `router`'s own routes run.
    #[must_use]
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        app::with_catalog(router, Arc::clone(&self.state))
    }
}

/// Build a catalog on the blocking pool and publish it to `store`.
///
/// The returned task finishes once the build has completed; its outcome is
/// logged. A failed build leaves the store's current snapshot in place.
pub fn spawn_build(store: Arc<CatalogStore>, builder: CatalogBuilder) -> JoinHandle<()> {
    tokio::spawn(async move {
        let root = builder.root().display().to_string();
        match tokio::task::spawn_blocking(move || store.rebuild(&builder)).await {
            Ok(Ok(catalog)) => {
                tracing::info!(root = %root, entries = catalog.len(), "Catalog ready");
            }
            Ok(Err(e)) => {
                tracing::error!(root = %root, error = %e, "Catalog build failed");
            }
            Err(e) => {
                tracing::error!(root = %root, error = %e, "Catalog build task failed");
            }
        }
    })
}

/// Run the standalone server.
///
/// The catalog is built in the background; until it is ready every request
/// gets a 404.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let store = Arc::new(CatalogStore::new());
    let _initial_build = spawn_build(Arc::clone(&store), CatalogBuilder::new(&config.root_dir));

    let state = Arc::new(AppState {
        store,
        url_prefix: config.url_prefix.clone(),
    });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        root = %config.root_dir.display(),
        url_prefix = config.url_prefix.as_deref().unwrap_or("/"),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from mdp config.
#[must_use]
pub fn server_config_from_mdp_config(config: &mdp_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        root_dir: config.catalog_resolved.root_dir.clone(),
        url_prefix: config.catalog_resolved.url_prefix.clone(),
    }
}
