//! Rebuilds the heading hierarchy from a flat token stream.
//!
//! # The High-Level Concept
//!
//! Markdown headings are not nested in the source: the tokenizer reports them as
//! a flat sequence of level-tagged events. The nesting is implied: a heading
//! belongs under the nearest preceding heading with a strictly smaller level.
//!
//! # The Algorithm
//!
//! A stack (`path`) holds the currently open headings with their levels, levels
//! strictly increasing from bottom to top. For every heading of level `L`:
//!
//! 1. Pop while the top of `path` has a level `>= L`. A heading of level `L`
//!    closes every open section at level `L` or deeper, including ones reached
//!    by skipping levels.
//! 2. The parent is whatever is left on top of `path` (none if it is empty).
//! 3. Add the node, and its parent edge if there is a parent.
//! 4. Push the new id.
//!
//! Example token stream and resulting edges:
//! ```text
//! # A      path [A1]          A is a root
//! ### B    path [A1, B3]      A -> B (no synthetic level-2 node)
//! ### C    path [A1, C3]      B closed, A -> C
//! ## D     path [A1, D2]      C closed, A -> D
//! # E      path [E1]          everything closed, E is a root
//! ```
//!
//! One linear pass, O(max depth) extra space, no lookahead beyond the token that
//! immediately follows a heading opener.

use crate::error::BuildError;
use crate::model::{MindMap, NodeId};
use crate::token::{Token, TokenKind};
use tracing::{debug, trace};

/// A heading detected in the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEvent {
    pub level: u8,
    pub text: String,
    /// 1-based line in the original document
    pub source_line: Option<usize>,
}

impl HeadingEvent {
    pub fn new(level: u8, text: impl Into<String>, source_line: Option<usize>) -> Self {
        Self {
            level,
            text: text.into(),
            source_line,
        }
    }
}

/// Extract heading events from a token stream, in document order.
///
/// A heading opener only produces an event when the very next token is its
/// inline content. Openers without one (empty or malformed headings) are
/// dropped without affecting anything else.
pub fn heading_events(tokens: &[Token]) -> Vec<HeadingEvent> {
    let mut events = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let TokenKind::HeadingOpen { level } = token.kind else {
            continue;
        };

        match tokens.get(i + 1).map(|t| &t.kind) {
            Some(TokenKind::Inline { content }) => {
                events.push(HeadingEvent {
                    level: level.clamp(1, 6),
                    text: content.clone(),
                    source_line: token.map.map(|span| span.first_line()),
                });
            }
            _ => trace!(index = i, level, "skipping heading without inline content"),
        }
    }

    events
}

/// Build a mind map from heading events using the level stack.
pub fn build_from_events<I>(events: I) -> Result<MindMap, BuildError>
where
    I: IntoIterator<Item = HeadingEvent>,
{
    let mut map = MindMap::new();
    let mut path: Vec<(NodeId, u8)> = Vec::new();

    for event in events {
        let level = event.level.max(1);

        while path.last().is_some_and(|&(_, open)| open >= level) {
            path.pop();
        }

        let parent = path.last().map(|&(id, _)| id);
        let id = map.add_node(event.text, event.level, parent, event.source_line);
        path.push((id, level));
    }

    if map.is_empty() {
        return Err(BuildError::NoHeadings);
    }

    debug!(
        nodes = map.len(),
        edges = map.edges().len(),
        "built heading hierarchy"
    );
    Ok(map)
}

/// Build a mind map straight from a token stream.
pub fn build_mindmap(tokens: &[Token]) -> Result<MindMap, BuildError> {
    build_from_events(heading_events(tokens))
}
