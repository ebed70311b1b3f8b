//! Catalog construction.
//!
//! Documents and menus are scanned and loaded side by side; within each group
//! files are read and transformed in parallel on the rayon pool. The build is
//! all-or-nothing: a single failed file fails the build, and every failure is
//! reported together.

use std::path::{Path, PathBuf};
use std::time::Instant;

use mdp_renderer::MarkdownRenderer;
use rayon::iter::{Either, IntoParallelRefIterator, ParallelIterator};

use crate::catalog::{Catalog, Entry};
use crate::document::{parse_document, parse_menu};
use crate::error::{CatalogError, FileError};
use crate::scanner::{Scanner, path_to_key};

/// Entries and failures from one group of files.
struct Loaded {
    entries: Vec<(String, Entry)>,
    failures: Vec<FileError>,
}

impl Loaded {
    fn from_results<I>(results: I) -> Self
    where
        I: ParallelIterator<Item = Result<(String, Entry), FileError>>,
    {
        let (entries, failures) = results.partition_map(|result| match result {
            Ok(entry) => Either::Left(entry),
            Err(err) => Either::Right(err),
        });
        Self { entries, failures }
    }
}

/// Builds a [`Catalog`] from a root directory.
///
/// # Example
///
/// ```ignore
/// use mdp_catalog::CatalogBuilder;
///
/// let catalog = CatalogBuilder::new("docs").build()?;
/// println!("{} entries", catalog.len());
/// ```
pub struct CatalogBuilder {
    root: PathBuf,
    renderer: MarkdownRenderer,
}

impl CatalogBuilder {
    /// Create a builder for `root` with the default renderer.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Use a custom renderer for document bodies.
    #[must_use]
    pub fn with_renderer(mut self, renderer: MarkdownRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Root directory of the catalog.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the root and build a complete catalog.
    ///
    /// Entry keys: document paths without `.md`, menu paths unchanged. When a
    /// menu key equals a document key the menu entry wins.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FileSystem`] if the root cannot be scanned and
    /// [`CatalogError::Build`] if any file fails to load.
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        let started = Instant::now();
        let scanner = Scanner::new(&self.root);

        let (documents, menus) = rayon::join(
            || self.load_documents(&scanner),
            || self.load_menus(&scanner),
        );
        let documents = documents?;
        let menus = menus?;

        let failures: Vec<FileError> = documents
            .failures
            .into_iter()
            .chain(menus.failures)
            .collect();
        if !failures.is_empty() {
            return Err(CatalogError::Build { failures });
        }

        let document_count = documents.entries.len();
        let menu_count = menus.entries.len();

        let mut catalog: Catalog = documents.entries.into_iter().collect();
        for (key, entry) in menus.entries {
            if catalog.insert(key.clone(), entry).is_some() {
                tracing::warn!(key = %key, "Menu file replaces document with the same key");
            }
        }

        tracing::info!(
            root = %self.root.display(),
            documents = document_count,
            menus = menu_count,
            elapsed_ms = started.elapsed().as_millis(),
            "Catalog built"
        );
        tracing::debug!(keys = ?catalog.keys().collect::<Vec<_>>(), "Files found");

        Ok(catalog)
    }

    fn load_documents(&self, scanner: &Scanner) -> Result<Loaded, CatalogError> {
        let paths = scanner.markdown_files()?;
        Ok(Loaded::from_results(paths.par_iter().map(|relative| {
            parse_document(&self.root, relative, &self.renderer)
                .map(|record| (document_key(relative), Entry::Document(record)))
        })))
    }

    fn load_menus(&self, scanner: &Scanner) -> Result<Loaded, CatalogError> {
        let paths = scanner.menu_files()?;
        Ok(Loaded::from_results(paths.par_iter().map(|relative| {
            parse_menu(&self.root, relative).map(|menu| (path_to_key(relative), Entry::Menu(menu)))
        })))
    }
}

/// Build a catalog for `root` with the default renderer.
pub fn build_catalog(root: impl Into<PathBuf>) -> Result<Catalog, CatalogError> {
    CatalogBuilder::new(root).build()
}

/// Catalog key for a markdown document: relative path without `.md`.
fn document_key(relative: &Path) -> String {
    let key = path_to_key(relative);
    match key.strip_suffix(".md") {
        Some(stripped) => stripped.to_owned(),
        None => key,
    }
}
