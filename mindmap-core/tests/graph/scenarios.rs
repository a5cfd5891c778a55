use super::outline;
use insta::assert_snapshot;
use mindmap_core::{parse_markdown, BuildError, Edge, MindMap, PluginSet};

fn parse(source: &str) -> MindMap {
    parse_markdown(source).expect("document should have headings")
}

#[test]
fn sibling_and_nested_headings() {
    let map = parse("# A\n## B\n## C\n### D\n# E\n");

    assert_snapshot!(outline(&map), @r"
    0 h1 A <- -
    1 h2 B <- 0
    2 h2 C <- 0
    3 h3 D <- 2
    4 h1 E <- -
    ");
    assert_eq!(
        map.edges(),
        &[
            Edge { from: 0, to: 1 },
            Edge { from: 0, to: 2 },
            Edge { from: 2, to: 3 },
        ]
    );

    let (nodes, _) = map.to_vis_data().unwrap();
    assert_eq!(
        nodes,
        concat!(
            r#"[{"id":0,"label":"A","level":1,"hidden":false,"line_number":1},"#,
            r#"{"id":1,"label":"B","level":2,"hidden":true,"line_number":2},"#,
            r#"{"id":2,"label":"C","level":2,"hidden":true,"line_number":3},"#,
            r#"{"id":3,"label":"D","level":3,"hidden":true,"line_number":4},"#,
            r#"{"id":4,"label":"E","level":1,"hidden":false,"line_number":5}]"#
        )
    );
}

#[test]
fn skipped_levels_attach_to_nearest_shallower_heading() {
    let map = parse("# A\n### B\n## C\n");
    assert_snapshot!(outline(&map), @r"
    0 h1 A <- -
    1 h3 B <- 0
    2 h2 C <- 0
    ");
}

#[test]
fn same_level_headings_after_a_skip_are_siblings() {
    let map = parse("# A\n### B\n### C\n");
    assert_snapshot!(outline(&map), @r"
    0 h1 A <- -
    1 h3 B <- 0
    2 h3 C <- 0
    ");
}

#[test]
fn document_starting_deep_has_deep_roots() {
    let map = parse("### Deep\n# Top\n## Under\n");
    assert_snapshot!(outline(&map), @r"
    0 h3 Deep <- -
    1 h1 Top <- -
    2 h2 Under <- 1
    ");
}

#[test]
fn shallower_heading_after_deep_start_is_a_root() {
    let map = parse("### Deep\n## Shallower\n");
    assert!(map.edges().is_empty());
}

#[test]
fn text_without_headings_is_an_error() {
    assert_eq!(
        parse_markdown("just text, no headings\n"),
        Err(BuildError::NoHeadings)
    );
}

#[test]
fn blank_document_is_empty_not_headingless() {
    assert_eq!(parse_markdown("  \n\n"), Err(BuildError::EmptyInput));
}

#[test]
fn empty_heading_is_skipped() {
    let map = parse("# A\n##\n### B\n");
    assert_snapshot!(outline(&map), @r"
    0 h1 A <- -
    1 h3 B <- 0
    ");
}

#[test]
fn headings_in_code_blocks_are_ignored() {
    let map = parse("# Real\n\n```\n# not a heading\n```\n\n## Also real\n");
    assert_eq!(map.len(), 2);
    assert_eq!(map.node(1).unwrap().source_line(), Some(7));
}

#[test]
fn fixture_outline_with_plugins() {
    let source = include_str!("../fixtures/roadmap.md");
    let map = parse(source).map_labels(&PluginSet::default());

    assert_snapshot!(outline(&map), @r#"
    0 h1 Roadmap 🚀 <- -
    1 h2 Research <- 0
    2 h3 Read <a href="https://github.com/vis-network/vis-network" target="_blank" class="enhanced-link">🐙 vis-network</a> <- 1
    3 h3 Prototype <code class="language-text">layout.rs</code> <- 1
    4 h2 Launch <- 0
    5 h4 Measure <span class="katex-inline" data-katex="\(O(n)\)">$O(n)$</span> <- 4
    6 h1 Appendix <- -
    "#);
    assert_eq!(map.node(0).unwrap().source_line(), Some(6));
}
