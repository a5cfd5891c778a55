//! Prism.js classes for inline code and fenced blocks.

use super::PluginAssets;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const PRISM_VERSION: &str = "1.29.0";

const SUPPORTED_LANGUAGES: &[&str] = &[
    "javascript",
    "python",
    "java",
    "cpp",
    "css",
    "html",
    "json",
    "yaml",
    "bash",
    "sql",
    "markdown",
];

static CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(\w+)?\n(.*?)\n```|`([^`]+)`").expect("code pattern is valid")
});

pub fn process(content: &str) -> String {
    CODE.replace_all(content, |caps: &Captures| match caps.get(3) {
        Some(inline) => format!(r#"<code class="language-text">{}</code>"#, inline.as_str()),
        None => {
            let language = caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|lang| SUPPORTED_LANGUAGES.contains(lang))
                .unwrap_or("text");
            let code = caps.get(2).map_or("", |m| m.as_str());
            format!(r#"<pre><code class="language-{language}">{code}</code></pre>"#)
        }
    })
    .into_owned()
}

pub fn assets() -> PluginAssets {
    let base = format!("https://cdn.jsdelivr.net/npm/prismjs@{PRISM_VERSION}");
    PluginAssets {
        css: vec![format!("{base}/themes/prism.min.css")],
        js: vec![
            format!("{base}/components/prism-core.min.js"),
            format!("{base}/plugins/autoloader/prism-autoloader.min.js"),
        ],
        inline_css: vec![],
    }
}
