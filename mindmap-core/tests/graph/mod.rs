mod frontmatter;
mod properties;
mod scenarios;

use mindmap_core::MindMap;

/// Compact outline of a graph: one `id level label <- parent` row per node.
pub(crate) fn outline(map: &MindMap) -> String {
    map.nodes()
        .iter()
        .map(|node| {
            let parent = map
                .parent_of(node.id())
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            format!(
                "{} h{} {} <- {}",
                node.id(),
                node.level(),
                node.label(),
                parent
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
