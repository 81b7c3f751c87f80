//! Placeholder markdown generation
//!
//!     A document is a top-level heading followed by `num_blocks` blocks. Each block is a
//!     paragraph, optionally preceded by a subheading and followed by a list, a code snippet
//!     and a link, depending on the block index and the configuration toggles:
//!
//!     | Element    | Emitted when                                  |
//!     |------------|-----------------------------------------------|
//!     | Subheading | index drawn as a subheading position          |
//!     | List       | `index % 4 == 1`                              |
//!     | Code       | `index % 5 == 2`                              |
//!     | Link       | `index % 3 == 0`                              |
//!
//!     Every element is separated from the next by a blank line. The random source is
//!     injected through [`Generator::new`]; [`Generator::default`] uses the thread-local RNG.

pub mod heading;
pub mod text;

use crate::code_examples::{CodeExample, CODE_EXAMPLES};
use crate::config::GenerationConfig;
use heading::{render_heading, HeadingStyle};
use rand::rngs::ThreadRng;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use std::collections::HashSet;
use text::Emphasis;
use tracing::debug;

/// Lower bound on subheadings, before capping at the block count.
pub const MIN_SUBHEADINGS: usize = 3;

/// Chance that a subheading is level 3 rather than level 2.
pub const H3_PROBABILITY: f64 = 0.3;

pub const BULLET_LIST: &str = "* First list item\n* Second list item\n* Third list item";

/// Stateless apart from its random source.
pub struct Generator<R = ThreadRng> {
    rng: R,
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a markdown document.
    ///
    /// Never fails and always terminates: the subheading count is capped at
    /// `num_blocks`, so even out-of-range block counts are safe here. Range
    /// checking belongs to [`GenerationConfig::validate`].
    pub fn generate(&mut self, config: &GenerationConfig) -> String {
        let style = HeadingStyle::from_underlined(config.underlined_headers);
        let emphasis = Emphasis::from_config(config);
        let mut out = String::new();

        if !config.no_headers {
            let phrase = text::heading_phrase(&mut self.rng);
            push_block(&mut out, &render_heading(&phrase, 1, style));
        }

        let subheadings = self.subheading_positions(config.num_blocks);
        debug!(
            num_blocks = config.num_blocks,
            subheadings = subheadings.len(),
            "generating document"
        );

        for i in 0..config.num_blocks {
            if subheadings.contains(&i) && !config.no_headers {
                let level = if self.rng.gen_bool(H3_PROBABILITY) { 3 } else { 2 };
                let phrase = text::heading_phrase(&mut self.rng);
                push_block(&mut out, &render_heading(&phrase, level, style));
            }

            let mut paragraph = text::paragraph(&mut self.rng, config.capitalize_sentences);
            if let Some(emphasis) = emphasis {
                paragraph = text::emphasize(&mut self.rng, &paragraph, emphasis);
            }
            push_block(&mut out, &paragraph);

            if !config.no_lists && i % 4 == 1 {
                push_block(&mut out, BULLET_LIST);
            }

            if !config.no_code_snippets && i % 5 == 2 {
                let example = self.code_example();
                push_block(&mut out, &code_snippet(example, config.code_blocks));
            }

            if !config.no_external_links && i % 3 == 0 {
                let n = i + 1;
                if config.reference_links {
                    push_block(
                        &mut out,
                        &format!("See [reference link][{n}] for more information."),
                    );
                    push_block(&mut out, &format!("[{n}]: https://example.com/ref{n}"));
                } else {
                    push_block(
                        &mut out,
                        &format!(
                            "See [inline link](https://example.com/page{n}) for more information."
                        ),
                    );
                }
            }
        }

        out
    }

    /// Distinct block indices that carry a subheading.
    fn subheading_positions(&mut self, num_blocks: usize) -> HashSet<usize> {
        let count = (num_blocks / 4).max(MIN_SUBHEADINGS).min(num_blocks);
        index::sample(&mut self.rng, num_blocks, count)
            .into_iter()
            .collect()
    }

    fn code_example(&mut self) -> &'static CodeExample {
        CODE_EXAMPLES
            .choose(&mut self.rng)
            .unwrap_or(&CODE_EXAMPLES[0])
    }
}

fn code_snippet(example: &CodeExample, fenced: bool) -> String {
    if fenced {
        format!("```{}\n{}\n```", example.language, example.code)
    } else {
        format!("`{}`", example.first_line())
    }
}

fn push_block(out: &mut String, block: &str) {
    out.push_str(block);
    out.push_str("\n\n");
}
