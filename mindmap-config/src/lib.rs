//! Settings for rendering a mind map page.
//!
//! The built-in values live in `defaults/mindmap.default.toml`, compiled into
//! the crate, and double as the documented reference for every key. A
//! [`Loader`] stacks `mindmap.toml`/`mindmap.yaml` files over them. Document
//! frontmatter and command-line flags arrive later as [`ConfigOverlay`]s,
//! applied with [`MindMapConfig::merge`].

mod overlay;
mod theme;

pub use overlay::ConfigOverlay;
pub use theme::{theme_colors, THEME_NAMES};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mindmap_core::{Layout, PluginSet, ViewOptions};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

const DEFAULT_TOML: &str = include_str!("../defaults/mindmap.default.toml");

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown theme '{name}' (available: {})", THEME_NAMES.join(", "))]
    UnknownTheme { name: String },
}

/// Configuration consumed by the page renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MindMapConfig {
    pub title: String,
    pub theme: String,
    pub colors: Vec<String>,
    pub color_freeze_level: u32,
    pub max_width: u32,
    pub spacing_horizontal: u32,
    pub spacing_vertical: u32,
    pub line_width: u32,
    pub duration: u32,
    pub initial_expand_level: i32,
    pub zoom: bool,
    pub pan: bool,
    pub toolbar: bool,
    pub layout: String,
    /// vis-network options merged over the layout preset. Keys are written in
    /// snake_case because configuration keys are case-folded on load.
    #[serde(default)]
    pub layout_options: Option<serde_json::Value>,
    pub plugins: BTreeMap<String, PluginToggle>,
}

/// A plugin entry: `math = false` or `math = { enabled = false }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PluginToggle {
    Flag(bool),
    Table { enabled: bool },
}

impl PluginToggle {
    pub fn enabled(self) -> bool {
        match self {
            PluginToggle::Flag(enabled) | PluginToggle::Table { enabled } => enabled,
        }
    }
}

impl MindMapConfig {
    /// Apply every field the overlay sets. Plugin entries merge per name.
    pub fn merge(&mut self, overlay: ConfigOverlay) {
        let ConfigOverlay {
            title,
            theme,
            colors,
            color_freeze_level,
            max_width,
            spacing_horizontal,
            spacing_vertical,
            line_width,
            duration,
            initial_expand_level,
            zoom,
            pan,
            toolbar,
            layout,
            layout_options,
            plugins,
        } = overlay;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = theme {
            self.theme = value;
        }
        if let Some(value) = colors {
            self.colors = value;
        }
        if let Some(value) = color_freeze_level {
            self.color_freeze_level = value;
        }
        if let Some(value) = max_width {
            self.max_width = value;
        }
        if let Some(value) = spacing_horizontal {
            self.spacing_horizontal = value;
        }
        if let Some(value) = spacing_vertical {
            self.spacing_vertical = value;
        }
        if let Some(value) = line_width {
            self.line_width = value;
        }
        if let Some(value) = duration {
            self.duration = value;
        }
        if let Some(value) = initial_expand_level {
            self.initial_expand_level = value;
        }
        if let Some(value) = zoom {
            self.zoom = value;
        }
        if let Some(value) = pan {
            self.pan = value;
        }
        if let Some(value) = toolbar {
            self.toolbar = value;
        }
        if let Some(value) = layout {
            self.layout = value;
        }
        if let Some(value) = layout_options {
            self.layout_options = Some(value);
        }
        self.plugins.extend(plugins);
    }

    /// Switch to a named theme, replacing the theme name and the colors.
    pub fn apply_theme(&mut self, name: &str) -> Result<(), ConfigLoadError> {
        let colors = theme_colors(name).ok_or_else(|| ConfigLoadError::UnknownTheme {
            name: name.to_string(),
        })?;
        self.theme = name.to_string();
        self.colors = colors.iter().map(|c| c.to_string()).collect();
        Ok(())
    }

    /// The configured layout, falling back to hierarchical for unknown names.
    pub fn layout(&self) -> Layout {
        self.layout.parse().unwrap_or_else(|err| {
            warn!("{err}; using {}", Layout::default());
            Layout::default()
        })
    }

    /// `layout_options` with keys renamed to vis-network's camelCase.
    pub fn layout_overrides(&self) -> Option<serde_json::Value> {
        self.layout_options.clone().map(camel_case_keys)
    }

    pub fn plugin_set(&self) -> PluginSet {
        let mut set = PluginSet::default();
        set.configure(
            self.plugins
                .iter()
                .map(|(name, toggle)| (name.as_str(), toggle.enabled())),
        );
        set
    }

    /// Settings for the browser viewer. Unknown plugin names are dropped.
    pub fn view_options(&self) -> ViewOptions {
        let plugins = self.plugin_set();
        ViewOptions {
            colors: self.colors.clone(),
            color_freeze_level: self.color_freeze_level,
            max_width: self.max_width,
            spacing_horizontal: self.spacing_horizontal,
            spacing_vertical: self.spacing_vertical,
            line_width: self.line_width,
            duration: self.duration,
            initial_expand_level: self.initial_expand_level,
            zoom: self.zoom,
            pan: self.pan,
            toolbar: self.toolbar,
            theme: self.theme.clone(),
            layout: self.layout().name().to_string(),
            plugins: mindmap_core::Plugin::ALL
                .iter()
                .map(|p| (p.name().to_string(), plugins.is_enabled(*p)))
                .collect(),
        }
    }
}

/// Builds a [`MindMapConfig`] from the compiled-in defaults plus config files.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the compiled-in defaults; add files with the `with_*` methods.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Stack a settings file given with `--config`; `build` fails if it is missing.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let source = File::from(path).format(file_format(path)).required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Stack a settings file that may not exist, such as `./mindmap.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let source = File::from(path).format(file_format(path)).required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `plugins.math`, above every file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigLoadError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the sources in order, later ones winning, into a [`MindMapConfig`].
    pub fn build(self) -> Result<MindMapConfig, ConfigLoadError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Config files are YAML unless their extension says otherwise.
fn file_format(path: &Path) -> FileFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        _ => FileFormat::Yaml,
    }
}

fn camel_case_keys(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camel_case(&key), camel_case_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camel_case_keys).collect()),
        other => other,
    }
}

/// `level_separation` -> `levelSeparation`.
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        match c {
            '_' if !out.is_empty() => upper = true,
            c if upper => {
                out.extend(c.to_uppercase());
                upper = false;
            }
            c => out.push(c),
        }
    }
    out
}

/// Settings with no user files applied.
pub fn load_defaults() -> Result<MindMapConfig, ConfigLoadError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.title, "Mind Map");
        assert_eq!(config.theme, "default");
        assert_eq!(config.colors.len(), 8);
        assert_eq!(config.max_width, 200);
        assert_eq!(config.initial_expand_level, -1);
        assert_eq!(config.layout(), Layout::Hierarchical);
        assert_eq!(
            config.plugin_set().enabled_names(),
            vec!["math", "code-highlight", "emoji", "links"]
        );
    }

    #[test]
    fn defaults_match_view_option_defaults() {
        let config = load_defaults().unwrap();
        assert_eq!(config.view_options(), ViewOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("layout", "radial")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.layout(), Layout::Radial);
    }

    #[test]
    fn dotted_override_reaches_a_plugin_toggle() {
        let config = Loader::new()
            .set_override("plugins.math", false)
            .unwrap()
            .build()
            .unwrap();
        assert!(!config.plugin_set().is_enabled(mindmap_core::Plugin::Math));
        assert!(config.plugin_set().is_enabled(mindmap_core::Plugin::Emoji));
    }

    #[test]
    fn yaml_file_layers_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mindmap.yaml");
        fs::write(
            &path,
            "max_width: 320\ntoolbar: false\nplugins:\n  emoji:\n    enabled: false\n",
        )
        .unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        assert_eq!(config.max_width, 320);
        assert!(!config.toolbar);
        assert_eq!(config.spacing_horizontal, 80);
        assert_eq!(
            config.plugin_set().enabled_names(),
            vec!["math", "code-highlight", "links"]
        );
    }

    #[test]
    fn layout_options_are_read_from_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mindmap.yaml");
        fs::write(
            &path,
            "layout_options:\n  physics:\n    enabled: true\n",
        )
        .unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        let options = config.layout_options.expect("layout options");
        assert_eq!(options["physics"]["enabled"], serde_json::json!(true));
        assert_eq!(load_defaults().unwrap().layout_options, None);
    }

    #[test]
    fn layout_overrides_use_vis_key_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mindmap.toml");
        fs::write(
            &path,
            "[layout_options.layout.hierarchical]\nlevel_separation = 220\n\n[layout_options.physics]\nstabilization = { iterations = 50 }\n",
        )
        .unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        let overrides = config.layout_overrides().expect("overrides");
        assert_eq!(
            overrides,
            serde_json::json!({
                "layout": { "hierarchical": { "levelSeparation": 220 } },
                "physics": { "stabilization": { "iterations": 50 } }
            })
        );
        assert_eq!(load_defaults().unwrap().layout_overrides(), None);
    }

    #[test]
    fn camel_case_leaves_plain_keys_alone() {
        assert_eq!(camel_case("node_spacing"), "nodeSpacing");
        assert_eq!(camel_case("sort_method"), "sortMethod");
        assert_eq!(camel_case("physics"), "physics");
        assert_eq!(camel_case("_private"), "private");
    }

    #[test]
    fn toml_file_layers_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mindmap.toml");
        fs::write(&path, "title = \"Plans\"\n[plugins]\nmath = false\n").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        assert_eq!(config.title, "Plans");
        assert!(!config.plugin_set().is_enabled(mindmap_core::Plugin::Math));
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("absent.yaml")).build();
        assert!(matches!(result, Err(ConfigLoadError::Config(_))));
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let dir = tempdir().unwrap();
        let config = Loader::new()
            .with_optional_file(dir.path().join("mindmap.toml"))
            .build()
            .unwrap();
        assert_eq!(config, load_defaults().unwrap());
    }

    #[test]
    fn themes_replace_colors() {
        let mut config = load_defaults().unwrap();
        config.apply_theme("dark").unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.colors, vec!["#64b5f6", "#81c784", "#ffb74d", "#ba68c8"]);

        let err = config.apply_theme("neon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown theme 'neon' (available: default, dark, colorful, minimal)"
        );
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn unknown_layout_falls_back() {
        let mut config = load_defaults().unwrap();
        config.layout = "spiral".to_string();
        assert_eq!(config.layout(), Layout::Hierarchical);
        assert_eq!(config.view_options().layout, "hierarchical");
    }

    #[test]
    fn merge_only_touches_set_fields() {
        let mut config = load_defaults().unwrap();
        config.merge(ConfigOverlay {
            max_width: Some(120),
            plugins: [("links".to_string(), PluginToggle::Flag(false))].into(),
            ..ConfigOverlay::default()
        });
        assert_eq!(config.max_width, 120);
        assert_eq!(config.duration, 500);
        assert_eq!(
            config.view_options().plugins.get("links").copied(),
            Some(false)
        );
        assert_eq!(
            config.view_options().plugins.get("emoji").copied(),
            Some(true)
        );
    }
}
