//! Markdown headings to interactive mind maps
//!
//!     This crate turns the heading outline of a Markdown document into a node/link graph and
//!     renders it as a single self-contained HTML page.
//!
//!     It is a pure library: nothing here reads environment variables or prints. The only
//!     file-system access lives in `input` (reading documents) and `publish` (writing pages),
//!     and both report typed errors.
//!
//! Architecture
//!
//!     raw text
//!       → frontmatter::split_frontmatter   strips a leading YAML block, remembers its line count
//!       → markdown::tokenize_with_offset   comrak AST flattened to block tokens
//!       → builder::build_mindmap           level stack turns heading tokens into a forest
//!       → MindMap::map_labels              plugin pipeline rewrites labels
//!       → render::render_page              HTML, viewer script and embedded JSON
//!       → publish::publish                 `<output>.html` or an in-memory string
//!
//!     The file structure :
//!     .
//!     ├── builder.rs          # Hierarchy builder (heading events → MindMap)
//!     ├── model.rs            # Nodes, edges and the serialized view
//!     ├── token.rs            # Token stream consumed by the builder
//!     ├── markdown            # comrak adapter and document rendering
//!     ├── frontmatter.rs
//!     ├── plugins             # math, code-highlight, emoji, links
//!     ├── layout.rs           # vis-network layout presets
//!     ├── render.rs           # page assembly
//!     ├── publish.rs
//!     ├── input.rs
//!     └── error.rs
//!
//! Core Algorithm
//!
//!     Headings form a flat, level-tagged sequence. Each heading's parent is the nearest preceding
//!     heading with a strictly smaller level; skipped levels attach to whatever shallower heading
//!     is open and multiple level-1 headings are independent roots. See `builder` for details.
//!
//! Testing
//!     tests
//!     ├── lib.rs              # includes the modules below
//!     ├── graph
//!     │   ├── scenarios.rs
//!     │   └── properties.rs   # proptest invariants
//!     └── fixtures

pub mod builder;
pub mod error;
pub mod frontmatter;
pub mod input;
pub mod layout;
pub mod markdown;
pub mod model;
pub mod plugins;
pub mod publish;
pub mod render;
pub mod token;

pub use builder::{build_from_events, build_mindmap, HeadingEvent};
pub use error::{BuildError, MindmapError};
pub use frontmatter::{split_frontmatter, FrontMatter};
pub use input::load_document;
pub use layout::Layout;
pub use model::{Edge, GraphView, MindMap, Node, NodeId};
pub use plugins::{Plugin, PluginSet};
pub use publish::{publish, validate_output_path, PublishArtifact, PublishResult, PublishSpec};
pub use render::{render_page, Page, ViewOptions};

/// A parsed document: its graph plus the frontmatter split it was built from.
#[derive(Debug, Clone)]
pub struct ParsedDocument<'a> {
    pub mindmap: MindMap,
    pub frontmatter: FrontMatter<'a>,
}

/// Parse a whole document, frontmatter included, into a graph.
///
/// Source lines in the graph refer to the original document.
pub fn parse_document(source: &str) -> Result<ParsedDocument<'_>, BuildError> {
    if source.trim().is_empty() {
        return Err(BuildError::EmptyInput);
    }
    let frontmatter = split_frontmatter(source);
    let tokens = markdown::tokenize_with_offset(frontmatter.body, frontmatter.line_offset);
    let mindmap = build_mindmap(&tokens)?;
    Ok(ParsedDocument {
        mindmap,
        frontmatter,
    })
}

/// Parse a document into a graph, discarding the frontmatter.
pub fn parse_markdown(source: &str) -> Result<MindMap, BuildError> {
    parse_document(source).map(|parsed| parsed.mindmap)
}
