//! Markdown links to anchors with a type icon.

use super::PluginAssets;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

const LINK_CSS: &str = r#"
.enhanced-link {
    text-decoration: none;
    color: #1976d2;
    border-bottom: 1px dotted #1976d2;
}
.enhanced-link:hover {
    background-color: #e3f2fd;
    padding: 2px 4px;
    border-radius: 3px;
}
"#;

pub fn process(content: &str) -> String {
    LINK.replace_all(content, |caps: &Captures| {
        let text = &caps[1];
        let url = &caps[2];
        let icon = link_icon(url);
        format!(r#"<a href="{url}" target="_blank" class="enhanced-link">{icon} {text}</a>"#)
    })
    .into_owned()
}

fn link_icon(url: &str) -> &'static str {
    if url.contains("github.com") {
        "🐙"
    } else if url.contains("youtube.com") || url.contains("youtu.be") {
        "📺"
    } else if url.contains("docs.google.com") {
        "📄"
    } else if [".pdf", ".doc", ".docx"].iter().any(|ext| url.ends_with(ext)) {
        "📄"
    } else if [".jpg", ".jpeg", ".png", ".gif"]
        .iter()
        .any(|ext| url.ends_with(ext))
    {
        "🖼️"
    } else {
        "🔗"
    }
}

pub fn assets() -> PluginAssets {
    PluginAssets {
        css: vec![],
        js: vec![],
        inline_css: vec![LINK_CSS.to_string()],
    }
}
