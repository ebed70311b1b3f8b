//! Atomically swappable catalog snapshot.
//!
//! Readers take an `Arc<Catalog>` and keep using it for as long as they need;
//! a rebuild swaps in a complete new catalog only after it has been fully
//! built, so no reader ever sees a partial one.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::builder::CatalogBuilder;
use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Holder of the current catalog snapshot.
///
/// Starts out not ready (no snapshot) until the first successful build is
/// published.
pub struct CatalogStore {
    current: ArcSwapOption<Catalog>,
}

impl CatalogStore {
    /// Create an empty, not-yet-ready store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Current snapshot, or `None` if no build has succeeded yet.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Catalog>> {
        self.current.load_full()
    }

    /// Check whether a catalog has been published.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.current.load().is_some()
    }

    /// Publish a catalog, returning the snapshot it replaced.
    pub fn publish(&self, catalog: Catalog) -> Option<Arc<Catalog>> {
        self.current.swap(Some(Arc::new(catalog)))
    }

    /// Build a new catalog and publish it.
    ///
    /// On failure nothing is published and the previous snapshot (if any)
    /// stays current.
    ///
    /// # Errors
    ///
    /// Returns the build error unchanged.
    pub fn rebuild(&self, builder: &CatalogBuilder) -> Result<Arc<Catalog>, CatalogError> {
        let catalog = Arc::new(builder.build()?);
        self.current.store(Some(Arc::clone(&catalog)));
        Ok(catalog)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_new_store_is_not_ready() {
        let store = CatalogStore::new();

        assert!(!store.is_ready());
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_publish_replaces_snapshot() {
        let store = CatalogStore::new();

        assert!(store.publish(Catalog::default()).is_none());
        assert!(store.is_ready());
        assert!(store.publish(Catalog::default()).is_some());
    }

    #[test]
    fn test_rebuild_publishes_catalog() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "guide/intro.md", "Hello");
        let store = CatalogStore::new();

        let catalog = store.rebuild(&CatalogBuilder::new(temp_dir.path())).unwrap();

        assert!(catalog.contains("guide/intro"));
        assert!(store.snapshot().unwrap().contains("guide/intro"));
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_snapshot() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "guide/intro.md", "Hello");
        let store = CatalogStore::new();
        let builder = CatalogBuilder::new(temp_dir.path());
        let first = store.rebuild(&builder).unwrap();

        write(temp_dir.path(), "guide/added.md", "New page");
        write(temp_dir.path(), "guide/menu.json", "{broken");
        assert!(store.rebuild(&builder).is_err());

        let current = store.snapshot().unwrap();
        assert!(Arc::ptr_eq(&first, &current));
        assert!(!current.contains("guide/added"));
    }

    #[test]
    fn test_failed_first_build_stays_not_ready() {
        let store = CatalogStore::new();

        assert!(store.rebuild(&CatalogBuilder::new("/nonexistent/mdp-root")).is_err());
        assert!(!store.is_ready());
    }

    #[test]
    fn test_readers_keep_their_snapshot() {
        let store = CatalogStore::new();
        store.publish(Catalog::default());
        let held = store.snapshot().unwrap();

        let replaced = store.publish(Catalog::default()).unwrap();

        assert!(Arc::ptr_eq(&held, &replaced));
        assert!(!Arc::ptr_eq(&held, &store.snapshot().unwrap()));
    }
}
