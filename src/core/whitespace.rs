//! Whitespace clean-up applied after all token passes.

use regex::Regex;
use std::sync::LazyLock;

// Literal two-character escapes such as `\r` typed into the itinerary.
// Spaces around the escape go with it so the new line has no ragged edges.
static ESCAPED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\\[rvf][ \t]*").unwrap());
static CONTROL_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\r\x0b\x0c]+").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("\n{3,}").unwrap());

/// Collapses whitespace inside each line to single spaces and trims line edges.
pub fn trim_horizontal(content: &str) -> String {
    content
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turns `\r`, `\v`, `\f` (escaped or raw) into line breaks and keeps at most
/// one blank line between paragraphs.
pub fn trim_vertical(content: &str) -> String {
    let content = ESCAPED_BREAK.replace_all(content, "\n");
    let content = CONTROL_BREAK.replace_all(&content, "\n");
    BLANK_RUN.replace_all(&content, "\n\n").into_owned()
}

pub fn normalize(content: &str) -> String {
    trim_vertical(&trim_horizontal(content))
}
