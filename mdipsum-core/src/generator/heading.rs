//! ATX and Setext heading rendering

/// How headings are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// `# Title`, `## Title`, `### Title`
    Atx,
    /// Title followed by a line of `=` (level 1) or `-` (deeper levels)
    Setext,
}

impl HeadingStyle {
    pub fn from_underlined(underlined: bool) -> Self {
        if underlined {
            HeadingStyle::Setext
        } else {
            HeadingStyle::Atx
        }
    }
}

/// Render a heading without the trailing blank line.
///
/// Setext only knows two levels, so every level below 1 is underlined with `-`.
/// The underline is as long as the heading text in characters.
pub fn render_heading(text: &str, level: usize, style: HeadingStyle) -> String {
    match style {
        HeadingStyle::Atx => format!("{} {text}", "#".repeat(level.max(1))),
        HeadingStyle::Setext => {
            let marker = if level <= 1 { "=" } else { "-" };
            format!("{text}\n{}", marker.repeat(text.chars().count()))
        }
    }
}
