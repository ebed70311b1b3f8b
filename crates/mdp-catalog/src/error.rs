//! Catalog error types.

use std::io;
use std::path::PathBuf;

/// Error loading a single source file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// Source file disappeared between scan and read.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Source file could not be read as UTF-8 text.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Absolute path of the file.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Menu JSON or document front matter is malformed.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// Absolute path of the file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl FileError {
    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound(path) | Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Error building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Root directory (or a directory below it) could not be scanned.
    #[error("Cannot scan {}: {source}", path.display())]
    FileSystem {
        /// Directory that failed.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Scan pattern could not be compiled.
    #[error("Invalid scan pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// One or more files failed; no catalog was produced.
    #[error("Catalog build failed: {}", describe_failures(.failures))]
    Build {
        /// Every file-level failure of the build.
        failures: Vec<FileError>,
    },
}

fn describe_failures(failures: &[FileError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
