//! Built-in color themes.

pub const THEME_NAMES: [&str; 4] = ["default", "dark", "colorful", "minimal"];

/// Node colors for a built-in theme.
pub fn theme_colors(name: &str) -> Option<&'static [&'static str]> {
    let colors: &'static [&'static str] = match name {
        "default" => &["#1976d2", "#388e3c", "#f57c00", "#7b1fa2"],
        "dark" => &["#64b5f6", "#81c784", "#ffb74d", "#ba68c8"],
        "colorful" => &[
            "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#00bcd4",
        ],
        "minimal" => &["#424242", "#616161", "#757575", "#9e9e9e"],
        _ => return None,
    };
    Some(colors)
}
