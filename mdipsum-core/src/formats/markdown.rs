//! Markdown export: the generated document unchanged.

use crate::error::Error;
use crate::format::Format;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Generated markdown source"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn serialize(&self, markdown: &str) -> Result<String, Error> {
        Ok(markdown.to_string())
    }
}
