//! Per-file transforms: markdown documents and menu definitions.

use std::fs;
use std::io;
use std::path::Path;

use mdp_renderer::MarkdownRenderer;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::FileError;
use crate::front_matter::{parse_attributes, split_front_matter};

/// A rendered markdown document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentRecord {
    /// Front matter attributes (empty when the document has none).
    pub attrs: Map<String, Value>,
    /// Rendered HTML body.
    pub body: String,
}

/// Read and render one markdown document.
///
/// # Arguments
///
/// * `root` - Catalog root directory
/// * `relative` - Document path relative to `root`
/// * `renderer` - Renderer for the document body
pub fn parse_document(
    root: &Path,
    relative: &Path,
    renderer: &MarkdownRenderer,
) -> Result<DocumentRecord, FileError> {
    let path = root.join(relative);
    let text = read_source(&path)?;

    let (front_matter, body) = split_front_matter(&text);
    let attrs = match front_matter {
        Some(source) => parse_attributes(source).map_err(|message| FileError::Parse {
            path: path.clone(),
            message,
        })?,
        None => Map::new(),
    };

    Ok(DocumentRecord {
        attrs,
        body: renderer.render(body),
    })
}

/// Read and parse one menu definition file.
pub fn parse_menu(root: &Path, relative: &Path) -> Result<Value, FileError> {
    let path = root.join(relative);
    let text = read_source(&path)?;
    serde_json::from_str(&text).map_err(|e| FileError::Parse {
        path,
        message: e.to_string(),
    })
}

/// Read a source file as UTF-8 text.
fn read_source(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
