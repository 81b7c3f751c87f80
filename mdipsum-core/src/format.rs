//! Format trait definition
//!
//! Every export target implements [`Format`]. Formats receive the generated markdown
//! string and turn it into the bytes of the exported file.

use crate::error::Error;
use std::collections::HashMap;

/// Trait for export formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn serialize(&self, markdown: &str) -> Result<String, Error> {
///         Ok(markdown.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "text", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// The first entry is used when naming exported files.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize generated markdown into this format
    fn serialize(&self, markdown: &str) -> Result<String, Error>;

    /// Serialize, optionally using extra parameters.
    ///
    /// Formats without parameters can rely on the default implementation, which
    /// rejects any non-empty option map.
    fn serialize_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, Error> {
        if options.is_empty() {
            self.serialize(markdown)
        } else {
            Err(Error::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
