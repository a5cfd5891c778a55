//! Partial configurations applied over a loaded [`MindMapConfig`].
//!
//! Overlays come from two places: the `mindmap:` table of a document's YAML
//! frontmatter, and command-line flags.
//!
//! [`MindMapConfig`]: crate::MindMapConfig

use crate::{ConfigLoadError, PluginToggle};
use config::{Config, File, FileFormat};
use mindmap_core::Plugin;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Every field optional; `None` leaves the underlying value alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub title: Option<String>,
    pub theme: Option<String>,
    pub colors: Option<Vec<String>>,
    pub color_freeze_level: Option<u32>,
    pub max_width: Option<u32>,
    pub spacing_horizontal: Option<u32>,
    pub spacing_vertical: Option<u32>,
    pub line_width: Option<u32>,
    pub duration: Option<u32>,
    pub initial_expand_level: Option<i32>,
    pub zoom: Option<bool>,
    pub pan: Option<bool>,
    pub toolbar: Option<bool>,
    pub layout: Option<String>,
    pub layout_options: Option<serde_json::Value>,
    pub plugins: BTreeMap<String, PluginToggle>,
}

/// The parts of a frontmatter block we read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontmatterDocument {
    title: Option<String>,
    mindmap: Option<ConfigOverlay>,
}

impl ConfigOverlay {
    /// Read the overlay out of frontmatter YAML.
    ///
    /// A top-level `title` is used when the `mindmap` table doesn't set one.
    /// Documents without either yield `Ok(None)`.
    pub fn try_from_frontmatter(yaml: &str) -> Result<Option<Self>, ConfigLoadError> {
        let document: FrontmatterDocument = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()?;

        let FrontmatterDocument { title, mindmap } = document;
        let overlay = match (mindmap, title) {
            (None, None) => None,
            (Some(mut overlay), title) => {
                if overlay.title.is_none() {
                    overlay.title = title;
                }
                Some(overlay)
            }
            (None, title) => Some(ConfigOverlay {
                title,
                ..ConfigOverlay::default()
            }),
        };
        debug!(found = overlay.is_some(), "read frontmatter configuration");
        Ok(overlay)
    }

    /// Lenient form of [`try_from_frontmatter`](Self::try_from_frontmatter):
    /// broken YAML is logged and ignored.
    pub fn from_frontmatter(yaml: &str) -> Option<Self> {
        Self::try_from_frontmatter(yaml).unwrap_or_else(|err| {
            warn!("ignoring invalid frontmatter: {err}");
            None
        })
    }

    /// Disable the named plugins.
    pub fn disable_plugins<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.plugins
                .insert(name.to_string(), PluginToggle::Flag(false));
        }
    }

    /// Enable exactly the named plugins and disable all others.
    pub fn enable_only<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        let wanted: Vec<&str> = names.into_iter().collect();
        for plugin in Plugin::ALL {
            let enabled = wanted.contains(&plugin.name());
            self.plugins
                .insert(plugin.name().to_string(), PluginToggle::Flag(enabled));
        }
        for name in wanted {
            if name.parse::<Plugin>().is_err() {
                warn!("unknown plugin '{name}' in enable list");
            }
        }
    }
}
