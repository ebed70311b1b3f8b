//! Markdown and menu catalog for the mdp middleware.
//!
//! This crate turns a documentation directory into an in-memory [`Catalog`]:
//!
//! - Every `*.md` file at least one directory below the root becomes a
//!   [`DocumentRecord`] (front matter attributes plus rendered HTML), keyed by
//!   its relative path without the extension.
//! - Every `menu.json` file at least one directory below the root is parsed
//!   as JSON and keyed by its full relative path.
//! - `node_modules` directories are never scanned.
//!
//! Builds are all-or-nothing, and a [`CatalogStore`] publishes each finished
//! catalog as an immutable snapshot.
//!
//! # Example
//!
//! ```ignore
//! use mdp_catalog::{CatalogBuilder, CatalogStore};
//!
//! let store = CatalogStore::new();
//! store.rebuild(&CatalogBuilder::new("docs"))?;
//!
//! if let Some(catalog) = store.snapshot() {
//!     let entry = catalog.get("guide/intro");
//! }
//! ```

mod builder;
mod catalog;
mod document;
mod error;
mod front_matter;
mod scanner;
mod store;

pub use builder::{CatalogBuilder, build_catalog};
pub use catalog::{Catalog, Entry};
pub use document::{DocumentRecord, parse_document, parse_menu};
pub use error::{CatalogError, FileError};
pub use scanner::{DEPENDENCY_CACHE_DIR, Scanner};
pub use store::CatalogStore;
