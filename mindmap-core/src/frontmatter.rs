//! YAML frontmatter detection.
//!
//! Only a block at the very start of the document counts, and only the first
//! `---` pair after it closes the block. The YAML itself is left uninterpreted
//! here; `mindmap-config` reads the `mindmap:` table out of it.

use once_cell::sync::Lazy;
use regex::Regex;

static FRONTMATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").expect("frontmatter pattern is valid")
});

/// A document split into its frontmatter and Markdown body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Raw YAML between the delimiters, if the document has a block
    pub yaml: Option<&'a str>,
    /// Everything after the closing delimiter
    pub body: &'a str,
    /// Number of document lines taken by the block
    pub line_offset: usize,
}

pub fn split_frontmatter(source: &str) -> FrontMatter<'_> {
    match FRONTMATTER.captures(source) {
        Some(caps) => {
            let block = caps.get(0).map_or("", |m| m.as_str());
            FrontMatter {
                yaml: caps.get(1).map(|m| m.as_str()),
                body: &source[block.len()..],
                line_offset: block.matches('\n').count(),
            }
        }
        None => FrontMatter {
            yaml: None,
            body: source,
            line_offset: 0,
        },
    }
}
