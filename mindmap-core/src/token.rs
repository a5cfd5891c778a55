//! Flat token stream produced by the Markdown tokenizer.
//!
//! The hierarchy builder never looks at a Markdown AST. It only sees this flat,
//! document-ordered sequence, in which headings are open/inline/close triples and
//! nesting is implied by the heading level alone.

/// Source lines covered by a token: 0-based, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Shift the span down by `offset` lines (used when a frontmatter block was
    /// stripped before tokenizing).
    pub fn offset(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// 1-based line number of the first covered line.
    pub fn first_line(&self) -> usize {
        self.start + 1
    }
}

/// Represents a single token in the document stream.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Opening of a heading; `level` is its depth (1 for `#`)
    HeadingOpen { level: u8 },
    HeadingClose { level: u8 },
    ParagraphOpen,
    ParagraphClose,
    /// Raw inline source of the enclosing block
    Inline { content: String },
    /// Any other block element, named after the node type
    Block { name: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub map: Option<LineSpan>,
}

impl Token {
    pub fn new(kind: TokenKind, map: Option<LineSpan>) -> Self {
        Self { kind, map }
    }

    pub fn heading_open(level: u8, map: Option<LineSpan>) -> Self {
        Self::new(TokenKind::HeadingOpen { level }, map)
    }

    pub fn heading_close(level: u8) -> Self {
        Self::new(TokenKind::HeadingClose { level }, None)
    }

    pub fn inline(content: impl Into<String>, map: Option<LineSpan>) -> Self {
        Self::new(
            TokenKind::Inline {
                content: content.into(),
            },
            map,
        )
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.kind, TokenKind::Inline { .. })
    }
}
