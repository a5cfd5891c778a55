//! Reading source documents from disk.

use crate::error::MindmapError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a Markdown document, mapping each failure to a typed error.
///
/// Whitespace-only documents are rejected here so callers can report the path.
pub fn load_document(path: &Path) -> Result<String, MindmapError> {
    if !path.exists() {
        return Err(MindmapError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(MindmapError::NotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::PermissionDenied => MindmapError::PermissionDenied(path.to_path_buf()),
        ErrorKind::NotFound => MindmapError::InputNotFound(path.to_path_buf()),
        _ => MindmapError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let text = String::from_utf8(bytes).map_err(|_| MindmapError::InvalidUtf8(path.to_path_buf()))?;

    if text.trim().is_empty() {
        return Err(MindmapError::EmptyInput(path.to_path_buf()));
    }
    debug!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(text)
}
