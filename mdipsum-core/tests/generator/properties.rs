//! Properties that hold for every configuration and every random draw.

use crate::common::{any_config, generate_seeded, SETEXT_UNDERLINE, SINGLE_UNDERSCORE_WORD};
use mdipsum_core::{to_html, GenerationConfig};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn output_is_never_empty(config in any_config(), seed in any::<u64>()) {
        let doc = generate_seeded(&config, seed);
        prop_assert!(!doc.trim().is_empty());
        prop_assert!(doc.ends_with("\n\n"));
    }

    #[test]
    fn heading_counts_are_bounded(config in any_config(), seed in any::<u64>()) {
        let config = GenerationConfig { no_headers: false, underlined_headers: false, ..config };
        let doc = generate_seeded(&config, seed);
        let top = doc.lines().filter(|l| l.starts_with("# ")).count();
        let sub = doc
            .lines()
            .filter(|l| l.starts_with("## ") || l.starts_with("### "))
            .count();
        prop_assert_eq!(top, 1);
        prop_assert_eq!(sub, config.num_blocks.min(3));
    }

    #[test]
    fn no_headers_suppresses_every_heading(config in any_config(), seed in any::<u64>()) {
        let config = GenerationConfig { no_headers: true, ..config };
        let doc = generate_seeded(&config, seed);
        prop_assert!(doc.lines().all(|l| !l.starts_with('#')));
        prop_assert!(!SETEXT_UNDERLINE.is_match(&doc));
    }

    #[test]
    fn no_lists_suppresses_bullets(config in any_config(), seed in any::<u64>()) {
        let config = GenerationConfig { no_lists: true, ..config };
        let doc = generate_seeded(&config, seed);
        prop_assert!(doc.lines().all(|l| !l.starts_with("* ")));
    }

    #[test]
    fn no_external_links_suppresses_links(config in any_config(), seed in any::<u64>()) {
        let config = GenerationConfig { no_external_links: true, ..config };
        let doc = generate_seeded(&config, seed);
        prop_assert!(!doc.contains("](http"));
        prop_assert!(!doc.contains("]: http"));
    }

    #[test]
    fn strong_dominates_em(config in any_config(), seed in any::<u64>()) {
        let config = GenerationConfig { em_style: true, strong_style: true, ..config };
        let doc = generate_seeded(&config, seed);
        prop_assert!(!SINGLE_UNDERSCORE_WORD.is_match(&doc));
    }

    #[test]
    fn underlined_headers_never_use_hashes(config in any_config(), seed in any::<u64>()) {
        let config = GenerationConfig { underlined_headers: true, ..config };
        let doc = generate_seeded(&config, seed);
        prop_assert!(doc.lines().all(|l| !l.starts_with('#')));
    }

    #[test]
    fn atx_headers_never_underline(config in any_config(), seed in any::<u64>()) {
        let config = GenerationConfig { underlined_headers: false, ..config };
        let doc = generate_seeded(&config, seed);
        prop_assert!(!SETEXT_UNDERLINE.is_match(&doc));
    }

    #[test]
    fn inert_flags_have_no_effect(config in any_config(), seed in any::<u64>()) {
        let off = GenerationConfig { no_inline_markup: false, no_blockquotes: false, ..config.clone() };
        let on = GenerationConfig { no_inline_markup: true, no_blockquotes: true, ..config };
        prop_assert_eq!(generate_seeded(&off, seed), generate_seeded(&on, seed));
    }

    #[test]
    fn no_wrapping_does_not_change_generation(config in any_config(), seed in any::<u64>()) {
        let wrapped = GenerationConfig { no_wrapping: false, ..config.clone() };
        let flat = GenerationConfig { no_wrapping: true, ..config };
        prop_assert_eq!(generate_seeded(&wrapped, seed), generate_seeded(&flat, seed));
    }

    #[test]
    fn html_export_is_a_complete_document(config in any_config(), seed in any::<u64>()) {
        let html = to_html(&generate_seeded(&config, seed));
        prop_assert!(html.starts_with("<!DOCTYPE html>"));
        prop_assert!(html.ends_with("</html>"));
        prop_assert!(html.lines().all(|l| !l.starts_with("* ") && !l.starts_with('#')));
    }

    #[test]
    fn html_export_converts_inline_links_only(config in any_config(), seed in any::<u64>()) {
        let config = GenerationConfig { no_external_links: false, ..config };
        let html = to_html(&generate_seeded(&config, seed));
        if config.reference_links {
            prop_assert!(html.contains("[reference link][1]"));
            prop_assert!(!html.contains("<a href="));
        } else {
            prop_assert!(html.contains(r#"<a href="https://example.com/page1">inline link</a>"#));
        }
    }
}
