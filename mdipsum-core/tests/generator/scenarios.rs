//! Concrete generation scenarios.

use crate::common::generate_seeded;
use mdipsum_core::{generate, to_html, Error, GenerationConfig};
use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(javascript|bash|python|sql)\n.*?\n```").unwrap());

#[test]
fn single_bare_block_is_one_paragraph() {
    let config = GenerationConfig {
        no_headers: true,
        no_lists: true,
        no_code_snippets: true,
        no_external_links: true,
        ..GenerationConfig::with_blocks(1)
    };
    for seed in 0..20 {
        let doc = generate_seeded(&config, seed);
        let paragraph = doc.strip_suffix("\n\n").expect("trailing blank line");
        assert!(!paragraph.is_empty());
        assert!(!paragraph.contains('\n'));
        assert!(paragraph.ends_with('.'));
        assert!(!paragraph.contains(&['#', '*', '`', '[', '_'][..]));
    }
}

#[test]
fn ten_blocks_with_code_blocks_contain_fences() {
    let config = GenerationConfig {
        code_blocks: true,
        ..GenerationConfig::with_blocks(10)
    };
    for seed in 0..20 {
        let doc = generate_seeded(&config, seed);
        assert_eq!(FENCED_BLOCK.find_iter(&doc).count(), 2, "{doc}");
    }
}

#[test]
fn single_block_terminates() {
    for seed in 0..20 {
        let doc = generate_seeded(&GenerationConfig::with_blocks(1), seed);
        assert!(doc.starts_with("# "));
    }
}

#[test]
fn capitalized_sentences() {
    let config = GenerationConfig {
        no_headers: true,
        capitalize_sentences: true,
        ..GenerationConfig::with_blocks(1)
    };
    let doc = generate_seeded(&config, 3);
    let paragraph = doc.lines().next().unwrap();
    for sentence in paragraph.split(". ") {
        assert!(sentence.chars().next().unwrap().is_uppercase(), "{sentence}");
    }
}

#[test]
fn generate_validates_block_count() {
    assert!(matches!(
        generate(&GenerationConfig::with_blocks(0)),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        generate(&GenerationConfig::with_blocks(11)),
        Err(Error::InvalidConfiguration(_))
    ));
    let doc = generate(&GenerationConfig::with_blocks(10)).unwrap();
    assert!(doc.starts_with("# "));
}

#[test]
fn unseeded_generation_round_trips_to_html() {
    let doc = generate(&GenerationConfig::default()).unwrap();
    let html = to_html(&doc);
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("</html>"));
    assert!(html.contains("<h1>"));
}
