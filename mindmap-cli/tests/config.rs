use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// The `window.MINDMAP` data object embedded in a generated page.
fn page_data(html: &str) -> serde_json::Value {
    let start = html.find("window.MINDMAP = ").expect("data object") + "window.MINDMAP = ".len();
    let end = start + html[start..].find(";\n</script>").expect("end of data object");
    serde_json::from_str(&html[start..end]).expect("valid JSON")
}

fn generate(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut cmd = cargo_bin_cmd!("mindmap");
    cmd.current_dir(dir).args(args);
    cmd.assert().success();
    page_data(&fs::read_to_string(dir.join("mindmap.html")).unwrap())
}

#[test]
fn defaults_apply_without_any_configuration() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "# Root\n").unwrap();

    let data = generate(dir.path(), &["doc.md"]);
    assert_eq!(data["config"]["theme"], "default");
    assert_eq!(data["config"]["maxWidth"], 200);
    assert_eq!(data["layout"], "hierarchical");
    assert_eq!(data["config"]["plugins"]["math"], true);
}

#[test]
fn config_file_frontmatter_and_flags_layer_in_order() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("settings.yaml"),
        "max_width: 300\nlayout: tree\nduration: 900\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("doc.md"),
        "---\nmindmap:\n  layout: radial\n  max_width: 250\n---\n# Root\n## Child\n",
    )
    .unwrap();

    let data = generate(
        dir.path(),
        &["doc.md", "-c", "settings.yaml", "--max-width", "180"],
    );
    assert_eq!(data["config"]["duration"], 900);
    assert_eq!(data["layout"], "radial");
    assert_eq!(data["config"]["maxWidth"], 180);
    assert_eq!(data["nodes"][0]["line_number"], 6);
}

#[test]
fn frontmatter_layout_options_merge_over_the_preset() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("doc.md"),
        "---\nmindmap:\n  layout: tree\n  layout_options:\n    layout:\n      hierarchical:\n        node_spacing: 40\n---\n# Root\n",
    )
    .unwrap();

    let data = generate(dir.path(), &["doc.md"]);
    assert_eq!(data["layoutOptions"]["layout"]["hierarchical"]["nodeSpacing"], 40);
    assert_eq!(data["layoutOptions"]["layout"]["hierarchical"]["direction"], "LR");
    assert_eq!(data["layouts"]["tree"]["layout"]["hierarchical"]["nodeSpacing"], 120);
}

#[test]
fn working_directory_config_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("mindmap.toml"), "toolbar = false\n").unwrap();
    fs::write(dir.path().join("doc.md"), "# Root\n").unwrap();

    let data = generate(dir.path(), &["doc.md"]);
    assert_eq!(data["config"]["toolbar"], false);
}

#[test]
fn theme_flag_overrides_frontmatter_theme() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("doc.md"),
        "---\nmindmap:\n  theme: minimal\n---\n# Root\n",
    )
    .unwrap();

    let data = generate(dir.path(), &["doc.md", "-t", "colorful"]);
    assert_eq!(data["config"]["theme"], "colorful");
    assert_eq!(data["config"]["colors"][0], "#e91e63");
    assert_eq!(data["config"]["colors"].as_array().map(Vec::len), Some(6));
}

#[test]
fn enable_only_restricts_plugins() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "# Go :rocket: `now`\n").unwrap();

    let data = generate(dir.path(), &["doc.md", "--enable-only", "emoji"]);
    assert_eq!(data["nodes"][0]["label"], "Go 🚀 `now`");
    assert_eq!(data["config"]["plugins"]["code-highlight"], false);
    assert_eq!(data["config"]["plugins"]["emoji"], true);
}

#[test]
fn broken_config_file_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.toml"), "max_width = \"wide\"\n").unwrap();
    fs::write(dir.path().join("doc.md"), "# Root\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mindmap");
    cmd.current_dir(dir.path()).args(["doc.md", "--config", "bad.toml"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Error: failed to load configuration"));
}
