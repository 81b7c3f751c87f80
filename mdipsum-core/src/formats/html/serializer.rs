//! HTML document assembly
//!
//! Converts generated markdown to a standalone HTML5 document with embedded CSS.
//! Pipeline: markdown → body fragment (see `converter`) → template

use super::converter::markdown_to_html_body;
use crate::formats::html::HtmlTheme;
use once_cell::sync::Lazy;
use regex::Regex;

const DEFAULT_TITLE: &str = "Lorem Ipsum Markdown";

static FIRST_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"<h1>(.*?)</h1>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// CSS theme to use
    pub theme: HtmlTheme,
    /// Optional custom CSS to append after the baseline and theme CSS
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            custom_css: None,
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Serialize generated markdown to HTML with the given theme
pub fn serialize_to_html(markdown: &str, theme: HtmlTheme) -> String {
    serialize_to_html_with_options(markdown, &HtmlOptions::new(theme))
}

/// Serialize generated markdown to HTML with full options
pub fn serialize_to_html_with_options(markdown: &str, options: &HtmlOptions) -> String {
    let body = markdown_to_html_body(markdown);
    let title = document_title(&body);
    wrap_in_document(&body, &title, options)
}

/// The baseline stylesheet embedded in every exported document.
pub fn get_default_css() -> &'static str {
    include_str!("../../../css/baseline.css")
}

/// Text of the first `<h1>`, or a fixed title for headerless documents.
fn document_title(body: &str) -> String {
    FIRST_H1
        .captures(body)
        .map(|caps| TAG.replace_all(&caps[1], "").trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let baseline_css = get_default_css();
    let theme_css = match options.theme {
        HtmlTheme::Light => include_str!("../../../css/themes/theme-light.css"),
        HtmlTheme::Dark => include_str!("../../../css/themes/theme-dark.css"),
    };

    // Custom CSS is appended after baseline and theme
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="mdipsum">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{theme_css}
{custom_css}
  </style>
</head>
<body>
<main class="ipsum-document">
{body_html}
</main>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_paragraph() {
        let html = serialize_to_html("This is a simple paragraph.\n", HtmlTheme::Light);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<p>This is a simple paragraph.</p>"));
    }

    #[test]
    fn test_title_from_first_heading() {
        let html = serialize_to_html("# Lorem Ipsum\n\nBody.\n", HtmlTheme::Light);
        assert!(html.contains("<title>Lorem Ipsum</title>"));
    }

    #[test]
    fn test_title_strips_inline_tags() {
        let html = serialize_to_html("# Lorem `Ipsum`\n", HtmlTheme::Light);
        assert!(html.contains("<title>Lorem Ipsum</title>"));
    }

    #[test]
    fn test_title_fallback() {
        let html = serialize_to_html("Body only.\n", HtmlTheme::Light);
        assert!(html.contains("<title>Lorem Ipsum Markdown</title>"));
    }

    #[test]
    fn test_css_embedded() {
        let html = serialize_to_html("Test document.\n", HtmlTheme::Light);

        assert!(html.contains("<style>"));
        assert!(html.contains(".ipsum-document"));
        assert!(html.contains("Georgia"));
    }

    #[test]
    fn test_dark_theme() {
        let html = serialize_to_html("Test document.\n", HtmlTheme::Dark);
        assert!(html.contains("#1e1e24"));
    }

    #[test]
    fn test_custom_css_appended() {
        let custom_css = ".my-custom-class { color: red; }";
        let options = HtmlOptions::new(HtmlTheme::Light).with_custom_css(custom_css.to_string());
        let html = serialize_to_html_with_options("Test document.\n", &options);

        assert!(html.contains(".my-custom-class { color: red; }"));
        assert!(html.contains(".ipsum-document"));
    }

    #[test]
    fn test_html_options_default() {
        let options = HtmlOptions::default();
        assert_eq!(options.theme, HtmlTheme::Light);
        assert!(options.custom_css.is_none());
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
