//! Page publishing.
//!
//! Bridges [`render_page`] and the filesystem: renders a [`Page`] and either
//! returns the HTML or writes it to `<output>.html`.

use crate::error::MindmapError;
use crate::render::{render_page, Page};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Specifies how to publish a page.
///
/// ```ignore
/// let spec = PublishSpec::new(page).with_output("out/notes");
/// ```
///
/// Without an output stem the HTML is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub page: Page<'a>,
    /// Output path without the `.html` extension
    pub output: Option<PathBuf>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(page: Page<'a>) -> Self {
        Self { page, output: None }
    }

    pub fn with_output(mut self, stem: impl AsRef<Path>) -> Self {
        self.output = Some(stem.as_ref().to_path_buf());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, MindmapError> {
    let html = render_page(&spec.page)?;
    let artifact = match spec.output {
        Some(stem) => PublishArtifact::File(write_page(&stem, &html)?),
        None => PublishArtifact::InMemory(html),
    };
    Ok(PublishResult { artifact })
}

/// The file a given output stem is written to.
pub fn html_path(stem: &Path) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(".html");
    PathBuf::from(name)
}

fn write_page(stem: &Path, html: &str) -> Result<PathBuf, MindmapError> {
    validate_output_path(stem)?;
    let path = html_path(stem);
    fs::write(&path, html).map_err(|source| MindmapError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = html.len(), "wrote mind map page");
    Ok(path)
}

/// Check that `output` names a file in a writable directory, creating missing
/// parent directories on the way.
pub fn validate_output_path(output: &Path) -> Result<(), MindmapError> {
    if output.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(MindmapError::InvalidOutput(
            "output filename cannot be empty".to_string(),
        ));
    }

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| MindmapError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!(dir = %dir.display(), "created output directory");
    }

    let metadata = fs::metadata(dir).map_err(|source| MindmapError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(MindmapError::InvalidOutput(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }
    if metadata.permissions().readonly() {
        return Err(MindmapError::InvalidOutput(format!(
            "output directory '{}' is not writable",
            dir.display()
        )));
    }
    Ok(())
}
