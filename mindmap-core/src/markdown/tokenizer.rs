use super::comrak_options;
use crate::token::{LineSpan, Token, TokenKind};
use comrak::arena_tree::NodeEdge;
use comrak::nodes::{AstNode, NodeValue, Sourcepos};
use comrak::{parse_document, Arena};
use tracing::debug;

/// Tokenize a Markdown body whose first line is line 1 of the document.
pub fn tokenize(body: &str) -> Vec<Token> {
    tokenize_with_offset(body, 0)
}

/// Tokenize a Markdown body that starts `line_offset` lines into the original
/// document (after a stripped frontmatter block, for instance).
pub fn tokenize_with_offset(body: &str, line_offset: usize) -> Vec<Token> {
    let arena = Arena::new();
    let options = comrak_options();
    let root = parse_document(&arena, body, &options);
    let lines: Vec<&str> = body.lines().collect();

    let mut tokens = Vec::new();
    for edge in root.traverse() {
        match edge {
            NodeEdge::Start(node) => open_node(node, &lines, line_offset, &mut tokens),
            NodeEdge::End(node) => close_node(node, &mut tokens),
        }
    }

    debug!(tokens = tokens.len(), "tokenized markdown body");
    tokens
}

fn open_node<'a>(
    node: &'a AstNode<'a>,
    lines: &[&str],
    line_offset: usize,
    tokens: &mut Vec<Token>,
) {
    let data = node.data.borrow();
    let map = Some(line_span(data.sourcepos).offset(line_offset));

    match &data.value {
        NodeValue::Heading(heading) => {
            tokens.push(Token::heading_open(heading.level, map));
            // Comrak gives an empty heading (`#`, `## ##`) no inline children
            if node.first_child().is_some() {
                let content = heading_text(lines, data.sourcepos, heading.setext);
                tokens.push(Token::inline(content, map));
            }
        }
        NodeValue::Paragraph => {
            tokens.push(Token::new(TokenKind::ParagraphOpen, map));
            tokens.push(Token::inline(block_text(lines, data.sourcepos), map));
        }
        value => {
            if let Some(name) = block_name(value) {
                tokens.push(Token::new(TokenKind::Block { name }, map));
            }
        }
    }
}

fn close_node<'a>(node: &'a AstNode<'a>, tokens: &mut Vec<Token>) {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => tokens.push(Token::heading_close(heading.level)),
        NodeValue::Paragraph => tokens.push(Token::new(TokenKind::ParagraphClose, None)),
        _ => {}
    }
}

fn block_name(value: &NodeValue) -> Option<&'static str> {
    let name = match value {
        NodeValue::BlockQuote => "blockquote",
        NodeValue::List(_) => "list",
        NodeValue::Item(_) => "list_item",
        NodeValue::CodeBlock(_) => "code_block",
        NodeValue::HtmlBlock(_) => "html_block",
        NodeValue::ThematicBreak => "thematic_break",
        NodeValue::Table(..) => "table",
        NodeValue::TableRow(_) => "table_row",
        NodeValue::TableCell => "table_cell",
        _ => return None,
    };
    Some(name)
}

/// Comrak positions are 1-based and inclusive; spans are 0-based, end exclusive.
fn line_span(pos: Sourcepos) -> LineSpan {
    let start = pos.start.line.saturating_sub(1);
    LineSpan::new(start, pos.end.line.max(start + 1))
}

/// Raw inline source of a heading, markers stripped.
///
/// ATX headings drop the opening `#` run and an optional closing sequence
/// (`# Title ##` gives `Title`, `# C#` keeps `C#`). Setext headings keep
/// every text line, joined with `\n`, and drop the underline.
pub fn heading_text(lines: &[&str], pos: Sourcepos, setext: bool) -> String {
    let first = pos.start.line.saturating_sub(1);
    let last = pos.end.line.saturating_sub(1).max(first);

    if setext {
        let text_end = if last > first { last } else { first + 1 };
        let text: Vec<&str> = (first..text_end)
            .map(|i| {
                let line = lines.get(i).copied().unwrap_or("");
                if i == first {
                    from_column(line, pos.start.column).trim()
                } else {
                    without_container_prefix(line, pos.start.column).trim()
                }
            })
            .collect();
        return text.join("\n").trim().to_string();
    }

    let line = lines.get(first).copied().unwrap_or("");
    strip_atx_markers(from_column(line, pos.start.column))
}

fn strip_atx_markers(line: &str) -> String {
    // Container prefixes (`> `, `- `) never contain `#`, so the first one opens the heading
    let opener = line.find('#').map_or(line, |at| &line[at..]);
    let text = opener.trim_start_matches('#').trim();
    let without_closing = text.trim_end_matches('#');
    if without_closing.is_empty() {
        String::new()
    } else if without_closing.ends_with([' ', '\t']) {
        without_closing.trim_end().to_string()
    } else {
        text.to_string()
    }
}

fn block_text(lines: &[&str], pos: Sourcepos) -> String {
    let first = pos.start.line.saturating_sub(1);
    let last = pos.end.line.saturating_sub(1).max(first);
    let text: Vec<&str> = (first..=last)
        .filter_map(|i| lines.get(i))
        .map(|line| line.trim())
        .collect();
    text.join("\n")
}

/// Drop block quote markers and list indentation before `column`. Lazy
/// continuation lines have no such prefix and are returned whole.
fn without_container_prefix(line: &str, column: usize) -> &str {
    let cut = column.saturating_sub(1);
    match line.get(..cut) {
        Some(prefix) if prefix.chars().all(|c| matches!(c, '>' | ' ' | '\t')) => &line[cut..],
        _ => line,
    }
}

fn from_column(line: &str, column: usize) -> &str {
    line.get(column.saturating_sub(1)..).unwrap_or(line)
}
