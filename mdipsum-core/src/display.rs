//! Display-only rendering of a generated document.
//!
//! `no_wrapping` never changes what gets generated or exported; it only
//! changes how the document is shown.

/// Flatten the document to one line when `no_wrapping` is set.
pub fn render_for_display(markdown: &str, no_wrapping: bool) -> String {
    if !no_wrapping {
        return markdown.to_string();
    }
    markdown
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
