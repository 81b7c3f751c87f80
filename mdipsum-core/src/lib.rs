//! Placeholder markdown generation and export
//!
//!     This crate generates synthetic "lorem ipsum" markdown documents from a set of toggles
//!     and a block count, and exports them as markdown, plain text or a standalone HTML page.
//!
//!     This is a pure lib, that is, it powers the mdipsum cli but is shell agnostic: no code
//!     here should suppose a shell environment, be it std printing, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── config.rs               # GenerationConfig and its validation
//!     ├── error.rs
//!     ├── vocabulary.rs           # Heading and body word lists
//!     ├── code_examples.rs        # Fixed code snippets
//!     ├── generator
//!     │   ├── mod.rs              # Document assembly (blocks, lists, code, links)
//!     │   ├── heading.rs          # ATX / Setext rendering
//!     │   └── text.rs             # Phrases, sentences, paragraphs, emphasis
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown.rs
//!     │   ├── text.rs
//!     │   └── html                # Regex converter + document template
//!     ├── publish.rs              # Serialize + write, download file names
//!     └── display.rs              # Display-only flattening for no_wrapping
//!
//! Core Algorithms
//!
//!     Generation is a pure function of the configuration and an injected random source
//!     (see generator/mod.rs). Nothing is seeded by default; tests pass a seeded `StdRng`.
//!
//!     HTML export does not parse markdown. It runs an ordered list of regex substitutions
//!     over the generator's own output (see formats/html/converter.rs), which is enough
//!     because the generator only ever emits a small, known subset of markdown. Reference
//!     style links are deliberately left untouched by that pipeline.
//!
//! Errors
//!
//!     Generation and conversion cannot fail. The only failures are an out of range block
//!     count (rejected by [`GenerationConfig::validate`]), unknown formats or options, and
//!     file writes.

pub mod code_examples;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod formats;
pub mod generator;
pub mod publish;
pub mod registry;
pub mod vocabulary;

pub use config::{GenerationConfig, MAX_BLOCKS, MIN_BLOCKS};
pub use error::Error;
pub use format::Format;
pub use generator::Generator;
pub use registry::FormatRegistry;

/// Validate the configuration and generate a document with the thread-local RNG.
pub fn generate(config: &GenerationConfig) -> Result<String, Error> {
    config.validate()?;
    let mut generator: Generator = Generator::default();
    Ok(generator.generate(config))
}

/// Convert generated markdown into a standalone HTML document (light theme).
pub fn to_html(markdown: &str) -> String {
    formats::html::serialize_to_html(markdown, formats::HtmlTheme::default())
}
