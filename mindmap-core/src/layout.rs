//! Graph layout presets for the browser renderer.
//!
//! Each [`Layout`] carries a vis-network options object (hierarchical
//! direction and spacing, or a physics solver with its constants), a short
//! description, and some layout specific CSS. The page embeds the options of
//! every layout so the viewer can switch between them without regenerating.

use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    #[default]
    Hierarchical,
    Radial,
    Tree,
    ForceDirected,
    Circular,
    Timeline,
}

impl Layout {
    pub const ALL: [Layout; 6] = [
        Layout::Hierarchical,
        Layout::Radial,
        Layout::Tree,
        Layout::ForceDirected,
        Layout::Circular,
        Layout::Timeline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Hierarchical => "hierarchical",
            Layout::Radial => "radial",
            Layout::Tree => "tree",
            Layout::ForceDirected => "force_directed",
            Layout::Circular => "circular",
            Layout::Timeline => "timeline",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Layout::Hierarchical => "Traditional top-down hierarchical layout",
            Layout::Radial => "Radial layout with central root node",
            Layout::Tree => "Left-to-right tree layout",
            Layout::ForceDirected => "Physics-based force-directed layout",
            Layout::Circular => "Circular arrangement of nodes",
            Layout::Timeline => "Timeline-style horizontal layout",
        }
    }

    pub fn best_for(self) -> &'static [&'static str] {
        match self {
            Layout::Hierarchical => &["Documentation", "Organizational charts", "Process flows"],
            Layout::Radial => &["Brainstorming", "Concept maps", "Knowledge networks"],
            Layout::Tree => &["Decision trees", "File structures", "Taxonomies"],
            Layout::ForceDirected => &[
                "Network analysis",
                "Relationship mapping",
                "Complex structures",
            ],
            Layout::Circular => &[
                "Cyclical processes",
                "Equal importance items",
                "Balanced views",
            ],
            Layout::Timeline => &[
                "Project timelines",
                "Historical events",
                "Sequential processes",
            ],
        }
    }

    /// vis-network options for this layout.
    pub fn options(self) -> Value {
        match self {
            Layout::Hierarchical => json!({
                "layout": {
                    "hierarchical": {
                        "direction": "UD",
                        "sortMethod": "directed",
                        "nodeSpacing": 100,
                        "levelSeparation": 150,
                        "treeSpacing": 200
                    }
                },
                "physics": { "enabled": false }
            }),
            Layout::Radial => json!({
                "layout": {
                    "hierarchical": { "direction": "UD", "sortMethod": "directed" }
                },
                "physics": {
                    "enabled": true,
                    "solver": "forceAtlas2Based",
                    "forceAtlas2Based": {
                        "gravitationalConstant": -50,
                        "centralGravity": 0.01,
                        "springLength": 100,
                        "springConstant": 0.08,
                        "damping": 0.4,
                        "avoidOverlap": 1
                    },
                    "stabilization": { "iterations": 150 }
                }
            }),
            Layout::Tree => json!({
                "layout": {
                    "hierarchical": {
                        "direction": "LR",
                        "sortMethod": "directed",
                        "nodeSpacing": 120,
                        "levelSeparation": 200
                    }
                },
                "physics": { "enabled": false }
            }),
            Layout::ForceDirected => json!({
                "layout": { "randomSeed": 2 },
                "physics": {
                    "enabled": true,
                    "solver": "barnesHut",
                    "barnesHut": {
                        "gravitationalConstant": -2000,
                        "centralGravity": 0.3,
                        "springLength": 95,
                        "springConstant": 0.04,
                        "damping": 0.09,
                        "avoidOverlap": 0.1
                    },
                    "stabilization": { "iterations": 200 }
                }
            }),
            Layout::Circular => json!({
                "layout": { "randomSeed": 1 },
                "physics": {
                    "enabled": true,
                    "solver": "forceAtlas2Based",
                    "forceAtlas2Based": {
                        "gravitationalConstant": -26,
                        "centralGravity": 0.005,
                        "springLength": 230,
                        "springConstant": 0.18,
                        "damping": 0.15
                    },
                    "stabilization": { "iterations": 100 }
                }
            }),
            Layout::Timeline => json!({
                "layout": {
                    "hierarchical": {
                        "direction": "LR",
                        "sortMethod": "directed",
                        "nodeSpacing": 80,
                        "levelSeparation": 300,
                        "treeSpacing": 100
                    }
                },
                "physics": { "enabled": false }
            }),
        }
    }

    /// Preset options with `custom` deep-merged on top.
    pub fn options_with(self, custom: &Value) -> Value {
        let mut options = self.options();
        deep_merge(&mut options, custom);
        options
    }

    /// Extra CSS for the network canvas, empty when the layout needs none.
    pub fn styles(self) -> &'static str {
        match self {
            Layout::Radial => {
                r#".vis-network {
    background: radial-gradient(circle, rgba(255,255,255,0.1) 0%, rgba(240,240,240,0.3) 100%);
}"#
            }
            Layout::Circular => {
                r#".vis-network {
    background: conic-gradient(from 0deg, rgba(255,255,255,0.1), rgba(240,240,240,0.2), rgba(255,255,255,0.1));
}"#
            }
            Layout::Timeline => {
                r#".vis-network {
    background: linear-gradient(90deg, rgba(255,255,255,0.1) 0%, rgba(240,240,240,0.2) 50%, rgba(255,255,255,0.1) 100%);
}
.vis-network::before {
    content: '';
    position: absolute;
    top: 50%;
    left: 0;
    right: 0;
    height: 2px;
    background: linear-gradient(90deg, transparent 0%, #ccc 20%, #ccc 80%, transparent 100%);
    z-index: 0;
}"#
            }
            Layout::ForceDirected => {
                r#".vis-network {
    background: radial-gradient(ellipse at center, rgba(255,255,255,0.1) 0%, rgba(230,230,230,0.3) 100%);
}"#
            }
            Layout::Hierarchical | Layout::Tree => "",
        }
    }

    /// Every layout's options keyed by name, as embedded in the page.
    pub fn options_table() -> Value {
        let table: Map<String, Value> = Layout::ALL
            .iter()
            .map(|layout| (layout.name().to_string(), layout.options()))
            .collect();
        Value::Object(table)
    }
}

/// Suggest layouts for a graph of the given size and depth.
pub fn recommend(node_count: usize, max_depth: u8) -> Vec<Layout> {
    let mut picks = match node_count {
        0..=10 => vec![Layout::Radial, Layout::Circular],
        11..=30 => vec![Layout::Hierarchical, Layout::Tree, Layout::Radial],
        _ => vec![Layout::Hierarchical, Layout::ForceDirected],
    };
    if max_depth <= 3 {
        picks.push(Layout::Circular);
    } else if max_depth >= 5 {
        picks.extend([Layout::Hierarchical, Layout::Tree]);
    }

    let mut unique = Vec::with_capacity(picks.len());
    for layout in picks {
        if !unique.contains(&layout) {
            unique.push(layout);
        }
    }
    unique
}

fn deep_merge(base: &mut Value, over: &Value) {
    match (base, over) {
        (Value::Object(base), Value::Object(over)) => {
            for (key, value) in over {
                let nested = value.is_object() && base.get(key).is_some_and(Value::is_object);
                match base.get_mut(key) {
                    Some(existing) if nested => deep_merge(existing, value),
                    _ => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, over) => *base = over.clone(),
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown layout '{0}' (available: hierarchical, radial, tree, force_directed, circular, timeline)"
)]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.name() == s)
            .ok_or_else(|| UnknownLayout(s.to_string()))
    }
}
