//! KaTeX markup for `$inline$` and `$$block$$` math.

use super::PluginAssets;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const KATEX_VERSION: &str = "0.16.8";

static MATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\$([^$]+)\$\$|\$([^$]+)\$").expect("math pattern is valid"));

pub fn process(content: &str) -> String {
    MATH.replace_all(content, |caps: &Captures| {
        if let Some(block) = caps.get(1) {
            let expr = block.as_str();
            format!(r#"<div class="katex-block" data-katex="\[{expr}\]">$${expr}$$</div>"#)
        } else {
            let expr = caps.get(2).map_or("", |m| m.as_str());
            format!(r#"<span class="katex-inline" data-katex="\({expr}\)">${expr}$</span>"#)
        }
    })
    .into_owned()
}

pub fn assets() -> PluginAssets {
    let base = format!("https://cdn.jsdelivr.net/npm/katex@{KATEX_VERSION}/dist");
    PluginAssets {
        css: vec![format!("{base}/katex.min.css")],
        js: vec![
            format!("{base}/katex.min.js"),
            format!("{base}/contrib/auto-render.min.js"),
        ],
        inline_css: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_math() {
        assert_eq!(
            process("Euler: $e^{i\\pi}$"),
            r#"Euler: <span class="katex-inline" data-katex="\(e^{i\pi}\)">$e^{i\pi}$</span>"#
        );
    }

    #[test]
    fn block_math_is_not_split_by_inline_rule() {
        assert_eq!(
            process("$$x^2$$"),
            r#"<div class="katex-block" data-katex="\[x^2\]">$$x^2$$</div>"#
        );
    }

    #[test]
    fn lone_dollar_is_untouched() {
        assert_eq!(process("costs $5"), "costs $5");
    }
}
