//! HTML format implementation
//!
//! Exports generated markdown as a single, self-contained HTML5 document.
//!
//! # Element Mapping Table
//!
//! | Markdown                      | HTML                                      |
//! |-------------------------------|-------------------------------------------|
//! | `# text` / `text` + `===`     | `<h1>`                                    |
//! | `## text` / `text` + `---`    | `<h2>`                                    |
//! | `### text`                    | `<h3>`                                    |
//! | `**text**`, `__text__`        | `<strong>`                                |
//! | `_text_`                      | `<em>`                                    |
//! | fenced block with language    | `<pre><code class="language-x">`          |
//! | `` `text` ``                  | `<code>`                                  |
//! | `* item` runs                 | `<ul><li>`                                |
//! | `[label](url)`                | `<a href="url">label</a>`                 |
//! | `[label][N]`, `[N]: url`      | left as text                              |
//! | bare line after a blank line  | `<p>`                                     |
//!
//! # CSS and Theming
//!
//! HTML export includes embedded CSS from:
//! - `css/baseline.css`: fonts, spacing, code tint and link color (always included)
//! - `css/themes/theme-*.css`: light or dark color overrides layered on top
//! - optional custom CSS appended last (`css-path` option)
//!
//! # Output Format
//!
//! - Complete HTML5 document structure
//! - Embedded CSS in a `<style>` tag
//! - Title taken from the first level-1 heading
//! - Mobile-responsive viewport meta tag

mod converter;
mod serializer;

use crate::error::Error;
use crate::format::Format;
use std::collections::HashMap;
use std::fs;

pub use converter::markdown_to_html_body;
pub use serializer::{
    get_default_css, serialize_to_html, serialize_to_html_with_options, HtmlOptions,
};

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    /// CSS theme to use for export
    theme: HtmlTheme,
}

/// Available CSS themes for HTML export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlTheme {
    /// Dark text on a light page
    #[default]
    Light,
    /// Light text on a dark page
    Dark,
}

impl HtmlTheme {
    /// Parse a theme name; unknown names fall back to [`HtmlTheme::Light`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => HtmlTheme::Dark,
            "light" | "default" => HtmlTheme::Light,
            other => {
                tracing::warn!(theme = other, "unknown HTML theme, using light");
                HtmlTheme::Light
            }
        }
    }
}

impl HtmlFormat {
    /// Create a new HTML format with the specified theme
    pub fn new(theme: HtmlTheme) -> Self {
        Self { theme }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 document with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, markdown: &str) -> Result<String, Error> {
        Ok(serialize_to_html(markdown, self.theme))
    }

    fn serialize_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, Error> {
        let mut html_options = HtmlOptions::new(self.theme);
        for (key, value) in options {
            match key.as_str() {
                "theme" => html_options.theme = HtmlTheme::from_name(value),
                "css-path" => {
                    let css = fs::read_to_string(value).map_err(|e| Error::Io {
                        path: value.clone(),
                        message: e.to_string(),
                    })?;
                    html_options = html_options.with_custom_css(css);
                }
                other => {
                    return Err(Error::NotSupported(format!(
                        "Format 'html' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(serialize_to_html_with_options(markdown, &html_options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names() {
        assert_eq!(HtmlTheme::from_name("dark"), HtmlTheme::Dark);
        assert_eq!(HtmlTheme::from_name("light"), HtmlTheme::Light);
        assert_eq!(HtmlTheme::from_name("default"), HtmlTheme::Light);
        assert_eq!(HtmlTheme::from_name("neon"), HtmlTheme::Light);
    }

    #[test]
    fn theme_option_overrides_format_default() {
        let mut options = HashMap::new();
        options.insert("theme".to_string(), "dark".to_string());
        let html = HtmlFormat::default()
            .serialize_with_options("Body.\n", &options)
            .unwrap();
        assert_eq!(html, serialize_to_html("Body.\n", HtmlTheme::Dark));
    }

    #[test]
    fn missing_css_path_is_io_error() {
        let mut options = HashMap::new();
        options.insert(
            "css-path".to_string(),
            "/definitely/not/here.css".to_string(),
        );
        let result = HtmlFormat::default().serialize_with_options("Body.\n", &options);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut options = HashMap::new();
        options.insert("page-size".to_string(), "a4".to_string());
        let result = HtmlFormat::new(HtmlTheme::Dark).serialize_with_options("Body.\n", &options);
        assert!(matches!(result, Err(Error::NotSupported(_))));
    }
}
