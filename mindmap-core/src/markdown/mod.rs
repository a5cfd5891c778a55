//! Markdown tokenizer adapter
//!
//! # Library Choice
//!
//! We use the `comrak` crate for CommonMark parsing and for rendering the
//! document panel of the generated page. Comrak hands us a nested AST; the
//! hierarchy builder wants the opposite, a flat stream of block tokens in which
//! headings carry only their level. [`tokenize`] walks the AST once and
//! flattens it:
//!
//! | Comrak node  | Tokens                                               |
//! |--------------|------------------------------------------------------|
//! | Heading      | `HeadingOpen`, `Inline` (if non-empty), `HeadingClose` |
//! | Paragraph    | `ParagraphOpen`, `Inline`, `ParagraphClose`          |
//! | Other blocks | `Block { name }` on entry                             |
//!
//! Inline content is the raw source text of the block rather than comrak's
//! parsed inlines, so label plugins still see `$math$`, `` `code` ``, `:emoji:`
//! and `[links](...)` exactly as the author typed them.
//!
//! Headings inside block quotes and list items are tokenized like top-level
//! ones; the builder only cares about document order.

mod tokenizer;

pub use tokenizer::{heading_text, tokenize, tokenize_with_offset};

use comrak::{markdown_to_html, Options};

pub(crate) fn comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

/// Render a Markdown body to HTML for the page's document panel.
///
/// Raw HTML in the source is not passed through.
pub fn render_html(body: &str) -> String {
    markdown_to_html(body, &comrak_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = render_html("# Title\n\nSome *text*.\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn raw_html_is_not_passed_through() {
        let html = render_html("<script>alert(1)</script>\n");
        assert!(!html.contains("<script>"));
    }
}
