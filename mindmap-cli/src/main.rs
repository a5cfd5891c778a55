// Command-line interface for mindmap
//
// Reads a Markdown file, builds the heading hierarchy with mindmap-core and
// writes an interactive HTML page (or prints the graph as JSON).
//
// Usage:
//  mindmap <input> [-o <name>] [-c <config>] [-t <theme>] [-l <layout>]
//  mindmap <input> --json                 - Print {"nodes", "edges"} to stdout
//  mindmap --list-layouts                 - List available layouts
//
// Configuration is layered: built-in defaults, ./mindmap.toml, --config,
// document frontmatter, --theme, then the remaining flags.

mod cli;

use clap::ArgMatches;
use mindmap_config::{ConfigLoadError, ConfigOverlay, Loader, MindMapConfig};
use mindmap_core::layout::recommend;
use mindmap_core::{
    load_document, parse_document, publish, Layout, MindmapError, Page, PublishArtifact,
    PublishSpec,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Mindmap(#[from] MindmapError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("no input file given")]
    MissingInput,
}

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

fn main() {
    let matches = cli::build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-layouts") {
        handle_list_layouts_command();
        return;
    }

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

fn handle_list_layouts_command() {
    println!("Available layouts:\n");
    for layout in Layout::ALL {
        println!("  {:<16} {}", layout.name(), layout.description());
        println!("  {:<16} best for: {}", "", layout.best_for().join(", "));
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .ok_or(CliError::MissingInput)?;
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("mindmap");

    warn_on_unexpected_extension(&input);

    let mut config = load_cli_config(matches.get_one::<String>("config").map(String::as_str))?;

    let source = load_document(&input)?;
    let parsed =
        parse_document(&source).map_err(|err| MindmapError::from_build(err, &input))?;

    if let Some(yaml) = parsed.frontmatter.yaml {
        if let Some(overlay) = ConfigOverlay::from_frontmatter(yaml) {
            apply_frontmatter(&mut config, overlay);
        }
    }
    if let Some(theme) = matches.get_one::<String>("theme") {
        config.apply_theme(theme)?;
    }
    config.merge(flag_overlay(matches));

    let plugins = config.plugin_set();
    let mindmap = parsed.mindmap.map_labels(&plugins);
    debug!(
        nodes = mindmap.len(),
        depth = mindmap.max_depth(),
        layout = %config.layout(),
        plugins = ?plugins.enabled_names(),
        "mind map ready"
    );
    let suggested: Vec<&str> = recommend(mindmap.len(), mindmap.max_depth())
        .into_iter()
        .map(Layout::name)
        .collect();
    info!("layouts suited to this document: {}", suggested.join(", "));

    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&mindmap.serialize()).map_err(MindmapError::from)?;
        println!("{json}");
        return Ok(());
    }

    let view = config.view_options();
    let layout_overrides = config.layout_overrides();
    let page = Page {
        title: &config.title,
        mindmap: &mindmap,
        source: &source,
        body: parsed.frontmatter.body,
        view: &view,
        layout: config.layout(),
        layout_overrides: layout_overrides.as_ref(),
        plugins: &plugins,
    };
    let result = publish(PublishSpec::new(page).with_output(output))?;
    if let PublishArtifact::File(path) = result.artifact {
        println!(
            "Success: Interactive mind map saved to {}",
            path.display()
        );
    }
    Ok(())
}

fn warn_on_unexpected_extension(input: &Path) {
    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension {
        Some(ext) if MARKDOWN_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => warn!(
            "'{}' does not look like a Markdown file; processing anyway",
            input.display()
        ),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<MindMapConfig, ConfigLoadError> {
    let loader = Loader::new().with_optional_file("mindmap.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build()
}

/// Merge the frontmatter overlay. A theme named there brings its colors along
/// unless the overlay lists colors itself.
fn apply_frontmatter(config: &mut MindMapConfig, overlay: ConfigOverlay) {
    let theme = match (&overlay.theme, &overlay.colors) {
        (Some(theme), None) => Some(theme.clone()),
        _ => None,
    };
    config.merge(overlay);
    if let Some(theme) = theme {
        if let Err(err) = config.apply_theme(&theme) {
            warn!("frontmatter: {err}");
        }
    }
}

/// Overlay built from the explicit command-line flags.
fn flag_overlay(matches: &ArgMatches) -> ConfigOverlay {
    let mut overlay = ConfigOverlay {
        layout: matches.get_one::<String>("layout").cloned(),
        max_width: matches.get_one::<u32>("max-width").copied(),
        ..ConfigOverlay::default()
    };
    if matches.get_flag("no-toolbar") {
        overlay.toolbar = Some(false);
    }
    if let Some(names) = matches.get_many::<String>("disable-plugins") {
        overlay.disable_plugins(names.map(|name| name.trim()));
    }
    if let Some(names) = matches.get_many::<String>("enable-only") {
        overlay.enable_only(names.map(|name| name.trim()));
    }
    overlay
}
