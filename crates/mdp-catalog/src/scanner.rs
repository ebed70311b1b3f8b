//! Source file discovery by glob matching.
//!
//! The scanner only finds files; reading and parsing them is left to the
//! builder. Only files at least one directory below the root are matched, so
//! a `README.md` next to the root is never part of the catalog.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::CatalogError;

/// Directory name that is never scanned (package manager dependency cache).
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Markdown documents, at depth two or more.
const MARKDOWN_PATTERN: &str = "*/**/*.md";

/// Menu definition files, at depth two or more.
const MENU_PATTERN: &str = "*/**/menu.json";

/// Match options: wildcards never cross `/` and never match dotfiles.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Finds markdown and menu files below a root directory.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a scanner for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory being scanned.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find markdown files, as paths relative to the root.
    pub fn markdown_files(&self) -> Result<Vec<PathBuf>, CatalogError> {
        self.find(MARKDOWN_PATTERN)
    }

    /// Find `menu.json` files, as paths relative to the root.
    pub fn menu_files(&self) -> Result<Vec<PathBuf>, CatalogError> {
        self.find(MENU_PATTERN)
    }

    /// Find regular files matching `pattern` (relative to the root).
    ///
    /// Results are sorted. Fails if the root is missing, is not a directory,
    /// or a directory below it cannot be read.
    fn find(&self, pattern: &str) -> Result<Vec<PathBuf>, CatalogError> {
        self.check_root()?;

        let root_pattern = Pattern::escape(&self.root.to_string_lossy());
        let full_pattern = format!("{}/{pattern}", root_pattern.trim_end_matches('/'));

        let mut files = Vec::new();
        for entry in glob::glob_with(&full_pattern, MATCH_OPTIONS)? {
            let path = entry.map_err(|e| CatalogError::FileSystem {
                path: e.path().to_path_buf(),
                source: e.into(),
            })?;
            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };
            if is_excluded(relative) || !path.is_file() {
                continue;
            }
            files.push(relative.to_path_buf());
        }

        files.sort();
        tracing::debug!(root = %self.root.display(), pattern, count = files.len(), "Scanned");
        Ok(files)
    }

    /// Ensure the root exists and is a readable directory.
    fn check_root(&self) -> Result<(), CatalogError> {
        let fs_error = |source| CatalogError::FileSystem {
            path: self.root.clone(),
            source,
        };

        let metadata = fs::metadata(&self.root).map_err(fs_error)?;
        if !metadata.is_dir() {
            return Err(fs_error(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            )));
        }
        fs::read_dir(&self.root).map_err(fs_error)?;
        Ok(())
    }
}

/// Check whether a relative path passes through the dependency cache.
fn is_excluded(relative: &Path) -> bool {
    relative
        .components()
        .any(|c| c.as_os_str() == DEPENDENCY_CACHE_DIR)
}

/// Convert a relative path to a catalog key with `/` separators.
pub(crate) fn path_to_key(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_path_to_key() {
        assert_eq!(path_to_key(Path::new("guide/intro.md")), "guide/intro.md");
        assert_eq!(path_to_key(Path::new("a/b/c/menu.json")), "a/b/c/menu.json");
        assert_eq!(path_to_key(Path::new("./guide/intro.md")), "guide/intro.md");
    }

    #[test]
    fn test_markdown_files_require_a_subdirectory() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "README.md", "# Root");
        write(temp_dir.path(), "guide/intro.md", "# Intro");
        write(temp_dir.path(), "guide/advanced/tuning.md", "# Tuning");

        let files = Scanner::new(temp_dir.path()).markdown_files().unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("guide/advanced/tuning.md"),
                PathBuf::from("guide/intro.md"),
            ]
        );
    }

    #[test]
    fn test_markdown_files_exact_extension() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "guide/page.md", "");
        write(temp_dir.path(), "guide/page.mdx", "");
        write(temp_dir.path(), "guide/page.markdown", "");
        write(temp_dir.path(), "guide/page.md.bak", "");

        let files = Scanner::new(temp_dir.path()).markdown_files().unwrap();

        assert_eq!(files, vec![PathBuf::from("guide/page.md")]);
    }

    #[test]
    fn test_directories_are_not_matched() {
        let temp_dir = create_test_dir();
        fs::create_dir_all(temp_dir.path().join("guide/folder.md")).unwrap();
        write(temp_dir.path(), "guide/folder.md/inner.md", "");

        let files = Scanner::new(temp_dir.path()).markdown_files().unwrap();

        assert_eq!(files, vec![PathBuf::from("guide/folder.md/inner.md")]);
    }

    #[test]
    fn test_dependency_cache_is_excluded() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "node_modules/pkg/README.md", "");
        write(temp_dir.path(), "guide/node_modules/pkg/menu.json", "[]");
        write(temp_dir.path(), "guide/menu.json", "[]");

        let scanner = Scanner::new(temp_dir.path());

        assert!(scanner.markdown_files().unwrap().is_empty());
        assert_eq!(
            scanner.menu_files().unwrap(),
            vec![PathBuf::from("guide/menu.json")]
        );
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), ".git/notes.md", "");
        write(temp_dir.path(), "guide/.draft.md", "");
        write(temp_dir.path(), "guide/visible.md", "");

        let files = Scanner::new(temp_dir.path()).markdown_files().unwrap();

        assert_eq!(files, vec![PathBuf::from("guide/visible.md")]);
    }

    #[test]
    fn test_menu_files() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "menu.json", "[]");
        write(temp_dir.path(), "en/menu.json", "[]");
        write(temp_dir.path(), "en/api/menu.json", "[]");
        write(temp_dir.path(), "en/other.json", "[]");

        let files = Scanner::new(temp_dir.path()).menu_files().unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("en/api/menu.json"),
                PathBuf::from("en/menu.json"),
            ]
        );
    }

    #[test]
    fn test_empty_root() {
        let temp_dir = create_test_dir();
        let scanner = Scanner::new(temp_dir.path());

        assert!(scanner.markdown_files().unwrap().is_empty());
        assert!(scanner.menu_files().unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_fails() {
        let scanner = Scanner::new("/nonexistent/mdp-root");

        let err = scanner.markdown_files().unwrap_err();

        assert!(matches!(err, CatalogError::FileSystem { .. }));
    }

    #[test]
    fn test_root_is_file_fails() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "file.txt", "");

        let err = Scanner::new(temp_dir.path().join("file.txt"))
            .menu_files()
            .unwrap_err();

        assert!(matches!(err, CatalogError::FileSystem { .. }));
    }

    #[test]
    fn test_root_with_glob_metacharacters() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs [v1]");
        write(&root, "guide/intro.md", "");

        let files = Scanner::new(&root).markdown_files().unwrap();

        assert_eq!(files, vec![PathBuf::from("guide/intro.md")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_fails() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = create_test_dir();
        write(temp_dir.path(), "guide/intro.md", "# Intro");
        write(temp_dir.path(), "guide/private/secret.md", "# Secret");
        let locked = temp_dir.path().join("guide/private");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not restrict root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = Scanner::new(temp_dir.path()).markdown_files();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(
            matches!(&err, CatalogError::FileSystem { path, .. } if path.ends_with("guide/private")),
            "expected file system error for the locked directory, got {err:?}"
        );
    }
}
