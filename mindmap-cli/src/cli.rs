// Command definition, shared with build.rs for shell completions.

use clap::{Arg, ArgAction, Command, ValueHint};

pub const THEMES: &[&str] = &["default", "dark", "colorful", "minimal"];

pub const LAYOUTS: &[&str] = &[
    "hierarchical",
    "radial",
    "tree",
    "force_directed",
    "circular",
    "timeline",
];

pub fn build_cli() -> Command {
    Command::new("mindmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate an interactive mind map from a Markdown file")
        .long_about(
            "Turns the heading outline of a Markdown document into a collapsible\n\
            node-link diagram and writes it as a self-contained HTML page.\n\n\
            Settings are layered, later sources winning:\n  \
            built-in defaults, ./mindmap.toml, --config FILE,\n  \
            the document's `mindmap:` frontmatter, --theme, other flags.\n\n\
            Examples:\n  \
            mindmap notes.md                         # writes mindmap.html\n  \
            mindmap notes.md -o out/notes -t dark    # writes out/notes.html\n  \
            mindmap notes.md -l tree --no-toolbar\n  \
            mindmap notes.md --enable-only emoji,links\n  \
            mindmap notes.md --json                  # graph as JSON on stdout",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Markdown file to read")
                .required_unless_present("list-layouts")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("NAME")
                .help("Output file name without the .html extension")
                .default_value("mindmap")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Configuration file (YAML, TOML or JSON)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("theme")
                .short('t')
                .long("theme")
                .help("Color theme")
                .value_parser(clap::builder::PossibleValuesParser::new(THEMES)),
        )
        .arg(
            Arg::new("layout")
                .short('l')
                .long("layout")
                .help("Initial graph layout")
                .value_parser(clap::builder::PossibleValuesParser::new(LAYOUTS)),
        )
        .arg(
            Arg::new("no-toolbar")
                .long("no-toolbar")
                .help("Hide the toolbar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-width")
                .long("max-width")
                .value_name("PIXELS")
                .help("Maximum node width")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("disable-plugins")
                .long("disable-plugins")
                .value_name("NAMES")
                .help("Comma-separated plugins to disable")
                .value_delimiter(',')
                .num_args(1),
        )
        .arg(
            Arg::new("enable-only")
                .long("enable-only")
                .value_name("NAMES")
                .help("Comma-separated plugins to enable; all others are disabled")
                .value_delimiter(',')
                .num_args(1)
                .conflicts_with("disable-plugins"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the node and edge graph as JSON instead of writing a page")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-layouts")
                .long("list-layouts")
                .help("List available layouts")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue),
        )
}
