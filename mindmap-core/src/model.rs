//! The graph model: authoritative node and edge store for one document.
//!
//! A [`MindMap`] is append-only while the hierarchy builder runs and is handed
//! on as a read-only snapshot afterwards. Nodes can't be removed or edited; the
//! only per-node state that changes later (`hidden`) belongs to the browser-side
//! renderer and is never touched here.

use crate::plugins::PluginSet;
use serde::Serialize;

/// Identifier of a node, assigned sequentially from 0 in discovery order.
pub type NodeId = usize;

/// One heading of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    label: String,
    level: u8,
    hidden: bool,
    #[serde(rename = "line_number")]
    source_line: Option<usize>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Default visibility; only depth-1 headings start expanded.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// 1-based line of the heading in the original document.
    pub fn source_line(&self) -> Option<usize> {
        self.source_line
    }
}

/// Parent → child relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Serialization-ready view over a mind map, in id-ascending order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GraphView<'a> {
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MindMap {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl MindMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node with the next sequential id, plus its parent edge when
    /// `parent` is given. `parent` must name a node that already exists.
    pub fn add_node(
        &mut self,
        label: impl Into<String>,
        level: u8,
        parent: Option<NodeId>,
        source_line: Option<usize>,
    ) -> NodeId {
        let id = self.nodes.len();
        debug_assert!(parent.map_or(true, |p| p < id));

        self.nodes.push(Node {
            id,
            label: label.into(),
            level,
            hidden: level > 1,
            source_line,
        });
        if let Some(from) = parent {
            self.edges.push(Edge { from, to: id });
        }
        id
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent of `id`, if it is not a root.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.edges.iter().find(|e| e.to == id).map(|e| e.from)
    }

    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter(move |e| e.from == id).map(|e| e.to)
    }

    /// Nodes without a parent edge, in document order.
    pub fn roots(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .iter()
            .filter(move |n| self.edges.iter().all(|e| e.to != n.id))
    }

    /// Deepest heading level present (0 for an empty map).
    pub fn max_depth(&self) -> u8 {
        self.nodes.iter().map(|n| n.level).max().unwrap_or(0)
    }

    /// Order-preserving, JSON-compatible view of all nodes and edges.
    pub fn serialize(&self) -> GraphView<'_> {
        GraphView {
            nodes: &self.nodes,
            edges: &self.edges,
        }
    }

    /// Nodes and edges as two JSON arrays, ready for the graph widget.
    pub fn to_vis_data(&self) -> Result<(String, String), serde_json::Error> {
        Ok((
            serde_json::to_string(&self.nodes)?,
            serde_json::to_string(&self.edges)?,
        ))
    }

    /// Snapshot with every label passed through the enabled plugins. Ids,
    /// edges, levels, visibility and lines are carried over untouched.
    pub fn map_labels(&self, plugins: &PluginSet) -> MindMap {
        let nodes = self
            .nodes
            .iter()
            .map(|node| Node {
                label: plugins.apply(&node.label),
                ..node.clone()
            })
            .collect();
        MindMap {
            nodes,
            edges: self.edges.clone(),
        }
    }
}
