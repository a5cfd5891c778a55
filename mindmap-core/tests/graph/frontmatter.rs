use mindmap_core::{parse_document, split_frontmatter};

const DOC: &str = "---\nmindmap:\n  theme: dark\n---\n# Title\n\n## Section\n";

#[test]
fn frontmatter_is_stripped_before_parsing() {
    let parsed = parse_document(DOC).unwrap();
    assert_eq!(parsed.frontmatter.yaml, Some("mindmap:\n  theme: dark"));
    assert_eq!(parsed.mindmap.len(), 2);
}

#[test]
fn source_lines_count_frontmatter() {
    let parsed = parse_document(DOC).unwrap();
    let lines: Vec<Option<usize>> = parsed
        .mindmap
        .nodes()
        .iter()
        .map(|node| node.source_line())
        .collect();
    assert_eq!(lines, vec![Some(5), Some(7)]);
}

#[test]
fn only_a_leading_block_counts() {
    let doc = "# Title\n---\nnot: yaml\n---\n";
    let split = split_frontmatter(doc);
    assert_eq!(split.yaml, None);
    assert_eq!(split.body, doc);
}

#[test]
fn frontmatter_without_headings_is_still_headingless() {
    assert!(parse_document("---\ntitle: x\n---\nplain text\n").is_err());
}
