//! Error types for mind map operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the hierarchy builder itself.
///
/// The builder is deterministic, so none of these are worth retrying: they
/// describe the document, not the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The source was empty or whitespace only
    #[error("document is empty")]
    EmptyInput,
    /// The source had content but not a single usable heading
    #[error("no valid headings found; the document needs markdown headings (# ## ### etc.)")]
    NoHeadings,
}

/// Errors raised around the core: reading documents, rendering and writing pages.
#[derive(Debug, Error)]
pub enum MindmapError {
    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),
    #[error("'{}' is not a file", .0.display())]
    NotAFile(PathBuf),
    #[error("permission denied: cannot access '{}'", .0.display())]
    PermissionDenied(PathBuf),
    #[error("unable to decode '{}' as UTF-8", .0.display())]
    InvalidUtf8(PathBuf),
    #[error("input file '{}' is empty", .0.display())]
    EmptyInput(PathBuf),
    #[error("no valid headings found in '{}'; add markdown headings (# ## ### etc.)", path.display())]
    NoHeadings { path: PathBuf },
    #[error("invalid output path: {0}")]
    InvalidOutput(String),
    #[error("error writing to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MindmapError {
    /// Attach the document path to a builder failure.
    pub fn from_build(err: BuildError, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err {
            BuildError::EmptyInput => MindmapError::EmptyInput(path),
            BuildError::NoHeadings => MindmapError::NoHeadings { path },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_errors_pick_up_the_document_path() {
        let err = MindmapError::from_build(BuildError::NoHeadings, "notes.md");
        assert!(matches!(err, MindmapError::NoHeadings { ref path } if path == &PathBuf::from("notes.md")));
        assert!(err.to_string().contains("notes.md"));
    }

    #[test]
    fn write_failures_name_the_output() {
        let err = MindmapError::Write {
            path: PathBuf::from("out.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(err.to_string().starts_with("error writing to 'out.html'"));
    }
}
