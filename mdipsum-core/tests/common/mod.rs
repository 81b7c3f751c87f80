//! Shared helpers for integration tests.

use mdipsum_core::{GenerationConfig, Generator};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

/// A line made only of `=` or `-`, i.e. a Setext underline.
pub static SETEXT_UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[=-]+$").unwrap());

/// A word wrapped in exactly one underscore on each side.
pub static SINGLE_UNDERSCORE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)_[^_\s]+_(?:\s|$)").unwrap());

pub fn generate_seeded(config: &GenerationConfig, seed: u64) -> String {
    Generator::new(StdRng::seed_from_u64(seed)).generate(config)
}

/// Every toggle free, block count within the accepted range.
pub fn any_config() -> impl Strategy<Value = GenerationConfig> {
    (prop::collection::vec(any::<bool>(), 13), 1usize..=10).prop_map(|(flags, num_blocks)| {
        GenerationConfig {
            no_headers: flags[0],
            no_code_snippets: flags[1],
            no_inline_markup: flags[2],
            no_blockquotes: flags[3],
            no_lists: flags[4],
            no_external_links: flags[5],
            no_wrapping: flags[6],
            capitalize_sentences: flags[7],
            underlined_headers: flags[8],
            reference_links: flags[9],
            em_style: flags[10],
            strong_style: flags[11],
            code_blocks: flags[12],
            num_blocks,
        }
    })
}
