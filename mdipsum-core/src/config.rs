//! Generation options
//!
//! [`GenerationConfig`] is the single input of the generator. Every field is
//! optional when deserialized so partial TOML/JSON documents are accepted.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Smallest accepted number of content blocks.
pub const MIN_BLOCKS: usize = 1;
/// Largest accepted number of content blocks.
pub const MAX_BLOCKS: usize = 10;

/// Toggles and block count driving a single generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Suppress the document heading and every subheading.
    pub no_headers: bool,
    /// Suppress fenced code blocks and inline code.
    pub no_code_snippets: bool,
    /// Accepted but not applied by any generation rule.
    pub no_inline_markup: bool,
    /// Accepted but not applied by any generation rule.
    pub no_blockquotes: bool,
    /// Suppress the bullet lists.
    pub no_lists: bool,
    /// Suppress inline and reference-style links.
    pub no_external_links: bool,
    /// Display only: render the document on a single line.
    pub no_wrapping: bool,
    pub capitalize_sentences: bool,
    /// Setext headings (underlined with `=`/`-`) instead of `#` headings.
    pub underlined_headers: bool,
    pub reference_links: bool,
    /// Wrap roughly one word in ten with `_word_`.
    pub em_style: bool,
    /// Wrap roughly one word in ten with `__word__`. Wins over `em_style`.
    pub strong_style: bool,
    /// Fenced code blocks instead of a single line of inline code.
    pub code_blocks: bool,
    pub num_blocks: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            no_headers: false,
            no_code_snippets: false,
            no_inline_markup: false,
            no_blockquotes: false,
            no_lists: false,
            no_external_links: false,
            no_wrapping: false,
            capitalize_sentences: false,
            underlined_headers: false,
            reference_links: false,
            em_style: false,
            strong_style: false,
            code_blocks: false,
            num_blocks: 5,
        }
    }
}

impl GenerationConfig {
    /// Create a config with every toggle off and the given block count.
    pub fn with_blocks(num_blocks: usize) -> Self {
        Self {
            num_blocks,
            ..Self::default()
        }
    }

    /// Reject configurations the host should never hand to the generator.
    pub fn validate(&self) -> Result<(), Error> {
        if !(MIN_BLOCKS..=MAX_BLOCKS).contains(&self.num_blocks) {
            return Err(Error::InvalidConfiguration(format!(
                "num_blocks must be between {MIN_BLOCKS} and {MAX_BLOCKS}, got {}",
                self.num_blocks
            )));
        }
        Ok(())
    }

    /// Whether the emphasis pass runs over paragraphs.
    pub fn emphasizes(&self) -> bool {
        self.em_style || self.strong_style
    }
}
