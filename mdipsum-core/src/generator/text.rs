//! Random phrases, sentences and paragraphs
//!
//! Every function takes the random source explicitly so callers decide
//! whether output is seeded or not.

use crate::config::GenerationConfig;
use crate::vocabulary::{BODY_WORDS, HEADING_WORDS};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

pub const SENTENCES_PER_PARAGRAPH: RangeInclusive<usize> = 4..=15;
pub const WORDS_PER_SENTENCE: RangeInclusive<usize> = 8..=15;
pub const WORDS_PER_HEADING: RangeInclusive<usize> = 4..=10;

/// Chance that a single paragraph word gets wrapped in emphasis markers.
pub const EMPHASIS_PROBABILITY: f64 = 0.1;

/// Emphasis marker applied by [`emphasize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `_word_`
    Em,
    /// `__word__`
    Strong,
}

impl Emphasis {
    /// Strong wins when both styles are enabled.
    pub fn from_config(config: &GenerationConfig) -> Option<Self> {
        if !config.emphasizes() {
            None
        } else if config.strong_style {
            Some(Emphasis::Strong)
        } else {
            Some(Emphasis::Em)
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Emphasis::Em => "_",
            Emphasis::Strong => "__",
        }
    }
}

/// Distinct heading words, 4 to 10 of them.
pub fn heading_phrase<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(WORDS_PER_HEADING);
    HEADING_WORDS
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Body words drawn with replacement, terminated by a period.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R, capitalize: bool) -> String {
    let count = rng.gen_range(WORDS_PER_SENTENCE);
    let words: Vec<&str> = (0..count)
        .map(|_| BODY_WORDS[rng.gen_range(0..BODY_WORDS.len())])
        .collect();
    let sentence = format!("{}.", words.join(" "));
    if capitalize {
        capitalize_first(&sentence)
    } else {
        sentence
    }
}

/// A single-line paragraph of 4 to 15 sentences.
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R, capitalize: bool) -> String {
    let count = rng.gen_range(SENTENCES_PER_PARAGRAPH);
    (0..count)
        .map(|_| sentence(rng, capitalize))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap each space-separated word independently with [`EMPHASIS_PROBABILITY`].
pub fn emphasize<R: Rng + ?Sized>(rng: &mut R, text: &str, emphasis: Emphasis) -> String {
    let marker = emphasis.marker();
    text.split(' ')
        .map(|word| {
            if rng.gen_bool(EMPHASIS_PROBABILITY) {
                format!("{marker}{word}{marker}")
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
