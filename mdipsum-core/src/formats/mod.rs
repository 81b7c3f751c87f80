//! Format implementations
//!
//! Export targets for generated documents. Markdown and plain text carry the
//! generated string as-is; HTML runs it through the converter.

pub mod html;
pub mod markdown;
pub mod text;

pub use html::{get_default_css, HtmlFormat, HtmlOptions, HtmlTheme};
pub use markdown::MarkdownFormat;
pub use text::TextFormat;
