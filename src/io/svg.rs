//! SVG serialization of laid-out word clouds

use crate::io::configuration::{CLOUD_EXTENSION, DEFAULT_CLOUD_DIRECTORY, DEFAULT_CLOUD_STEM};
use crate::io::error::{Result, file_system};
use crate::layout::canvas::Canvas;
use crate::layout::placement::LayoutOutcome;
use crate::layout::tier::Tier;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// CSS rule styling every label of a tier
pub fn tier_rule(tier: &Tier) -> String {
    format!(
        ".{} {{ font: bold {}px sans-serif; fill: {}; }}",
        tier.name, tier.font_size, tier.color
    )
}

/// Escape characters with special meaning in XML text and attributes
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Render a layout as a complete SVG document
pub fn render_svg(outcome: &LayoutOutcome, canvas: &Canvas) -> String {
    let (width, height) = canvas.viewport;
    let mut svg = String::new();

    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\" style=\"background-color:white\">\n"
    ));

    svg.push_str("<style>\n");
    for tier in &outcome.legend {
        svg.push_str(&tier_rule(tier));
        svg.push('\n');
    }
    svg.push_str("</style>\n");

    for label in &outcome.labels {
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" class=\"{}\">{}</text>\n",
            label.x,
            label.y,
            escape_xml(&label.tier.name),
            escape_xml(&label.text)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render a layout and write it to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn write_svg(outcome: &LayoutOutcome, canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
    }

    std::fs::write(path, render_svg(outcome, canvas)).map_err(|e| file_system(path, "write svg", e))
}

/// Output path of the aggregate cloud: `<target>.svg` or `word_cloud.svg`
pub fn aggregate_cloud_path(target: Option<&Path>) -> PathBuf {
    let stem = target.map_or_else(|| PathBuf::from(DEFAULT_CLOUD_STEM), Path::to_path_buf);
    let mut name = stem.into_os_string();
    name.push(".");
    name.push(CLOUD_EXTENSION);
    PathBuf::from(name)
}

/// Directory receiving per-document clouds: `<target>` or `word_clouds`
pub fn cloud_directory(target: Option<&Path>) -> PathBuf {
    target.map_or_else(|| PathBuf::from(DEFAULT_CLOUD_DIRECTORY), Path::to_path_buf)
}

/// Flat file name for a document's cloud
///
/// Path separators become `-`, and one leading `.` followed by one leading
/// `-` are stripped so relative identifiers like `./notes/a.txt` do not
/// produce hidden files.
pub fn cloud_file_name(identifier: &str) -> String {
    let flattened: String = identifier
        .chars()
        .map(|ch| if ch == '/' || ch == '\\' { '-' } else { ch })
        .collect();
    let trimmed = flattened.strip_prefix('.').unwrap_or(&flattened);
    let trimmed = trimmed.strip_prefix('-').unwrap_or(trimmed);
    format!("{trimmed}.{CLOUD_EXTENSION}")
}
