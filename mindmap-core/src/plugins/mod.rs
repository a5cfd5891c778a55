//! Label rewriting plugins
//!
//! Plugins are pure text transforms applied to node labels once the graph has
//! been built, plus the stylesheets and scripts the page needs to display their
//! output. They never touch the graph structure.
//!
//! The set is closed: each plugin is a variant of [`Plugin`] and the pipeline
//! order is fixed (`math`, `code-highlight`, `emoji`, `links`). Configuration
//! only switches plugins on and off.

pub mod code;
pub mod emoji;
pub mod links;
pub mod math;

use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plugin {
    Math,
    CodeHighlight,
    Emoji,
    Links,
}

impl Plugin {
    /// Every plugin, in pipeline order.
    pub const ALL: [Plugin; 4] = [
        Plugin::Math,
        Plugin::CodeHighlight,
        Plugin::Emoji,
        Plugin::Links,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Plugin::Math => "math",
            Plugin::CodeHighlight => "code-highlight",
            Plugin::Emoji => "emoji",
            Plugin::Links => "links",
        }
    }

    pub fn process(self, content: &str) -> String {
        match self {
            Plugin::Math => math::process(content),
            Plugin::CodeHighlight => code::process(content),
            Plugin::Emoji => emoji::process(content),
            Plugin::Links => links::process(content),
        }
    }

    pub fn assets(self) -> PluginAssets {
        match self {
            Plugin::Math => math::assets(),
            Plugin::CodeHighlight => code::assets(),
            Plugin::Emoji => PluginAssets::default(),
            Plugin::Links => links::assets(),
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a plugin name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plugin '{0}' (available: math, code-highlight, emoji, links)")]
pub struct UnknownPlugin(pub String);

impl FromStr for Plugin {
    type Err = UnknownPlugin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plugin::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPlugin(s.to_string()))
    }
}

/// External stylesheets, scripts and inline CSS required by enabled plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginAssets {
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub inline_css: Vec<String>,
}

impl PluginAssets {
    fn extend(&mut self, other: PluginAssets) {
        self.css.extend(other.css);
        self.js.extend(other.js);
        self.inline_css.extend(other.inline_css);
    }
}

/// The plugin pipeline with per-plugin enabled flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSet {
    entries: Vec<(Plugin, bool)>,
}

impl Default for PluginSet {
    /// All plugins enabled.
    fn default() -> Self {
        Self {
            entries: Plugin::ALL.iter().map(|&p| (p, true)).collect(),
        }
    }
}

impl PluginSet {
    /// A pipeline with every plugin disabled.
    pub fn none() -> Self {
        Self {
            entries: Plugin::ALL.iter().map(|&p| (p, false)).collect(),
        }
    }

    pub fn set_enabled(&mut self, plugin: Plugin, enabled: bool) {
        for entry in &mut self.entries {
            if entry.0 == plugin {
                entry.1 = enabled;
            }
        }
    }

    pub fn is_enabled(&self, plugin: Plugin) -> bool {
        self.entries.iter().any(|&(p, on)| p == plugin && on)
    }

    /// Apply name → enabled settings. Unknown names are logged and ignored.
    pub fn configure<'a, I>(&mut self, settings: I)
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        for (name, enabled) in settings {
            match name.parse::<Plugin>() {
                Ok(plugin) => self.set_enabled(plugin, enabled),
                Err(err) => warn!("{err}; ignoring"),
            }
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Plugin> + '_ {
        self.entries.iter().filter(|(_, on)| *on).map(|&(p, _)| p)
    }

    pub fn enabled_names(&self) -> Vec<&'static str> {
        self.enabled().map(Plugin::name).collect()
    }

    /// Run `content` through every enabled plugin in pipeline order.
    pub fn apply(&self, content: &str) -> String {
        self.enabled()
            .fold(content.to_string(), |acc, plugin| plugin.process(&acc))
    }

    pub fn assets(&self) -> PluginAssets {
        let mut all = PluginAssets::default();
        for plugin in self.enabled() {
            all.extend(plugin.assets());
        }
        all
    }
}
