//! Plain text export.
//!
//! The generated markdown is already readable as text, so the `.txt` export
//! carries the same content as the `.md` one.

use crate::error::Error;
use crate::format::Format;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text (same content as markdown)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn serialize(&self, markdown: &str) -> Result<String, Error> {
        Ok(markdown.to_string())
    }
}
