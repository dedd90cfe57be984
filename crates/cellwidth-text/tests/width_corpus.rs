//! Width corpus for the clusters the diagnostic screens draw.
//!
//! Each case pins the cluster-aware width in both modes and the naive
//! per-codepoint width in narrow mode. Categories:
//! - ASCII and wide ideographs
//! - Icons with the emoji presentation selector
//! - East Asian Ambiguous letters and symbols
//! - Combining marks, ZWJ sequences, skin tones and flags

use cellwidth_core::WidthMode;
use cellwidth_text::{StringMetrics, WidthCalculator, cluster_count, strip_emoji_selector};

// =============================================================================
// Corpus
// =============================================================================

#[derive(Debug, Clone)]
struct WidthTestCase {
    input: &'static str,
    description: &'static str,
    narrow: usize,
    wide: usize,
    naive: usize,
}

impl WidthTestCase {
    const fn new(
        input: &'static str,
        description: &'static str,
        narrow: usize,
        wide: usize,
        naive: usize,
    ) -> Self {
        Self {
            input,
            description,
            narrow,
            wide,
            naive,
        }
    }
}

const PLAIN: &[WidthTestCase] = &[
    WidthTestCase::new("a", "ASCII letter", 1, 1, 1),
    WidthTestCase::new("Settings", "ASCII word", 8, 8, 8),
    WidthTestCase::new("\u{4E2D}", "CJK ideograph", 2, 2, 2),
    WidthTestCase::new("\u{FF21}", "fullwidth A", 2, 2, 2),
    WidthTestCase::new("\u{FF71}", "halfwidth katakana", 1, 1, 1),
];

const ICONS: &[WidthTestCase] = &[
    WidthTestCase::new("\u{2699}\u{FE0F}", "gear", 2, 2, 3),
    WidthTestCase::new("\u{1F5BC}\u{FE0F}", "frame with picture", 2, 2, 3),
    WidthTestCase::new("\u{1F5D1}\u{FE0F}", "wastebasket", 2, 2, 3),
    WidthTestCase::new("\u{2B05}\u{FE0F}", "left arrow", 2, 2, 3),
    WidthTestCase::new("\u{27A1}\u{FE0F}", "right arrow", 2, 2, 3),
    WidthTestCase::new("\u{2139}\u{FE0F}", "information", 2, 2, 3),
    WidthTestCase::new("\u{1F4E6}", "package", 2, 2, 2),
    WidthTestCase::new("\u{2699}\u{FE0F} Settings", "gear title", 11, 11, 12),
    WidthTestCase::new("\u{1F4E6} Pkg \u{2699}\u{FE0F} Cfg", "two icon title", 13, 13, 14),
];

const AMBIGUOUS: &[WidthTestCase] = &[
    WidthTestCase::new("\u{03B1}", "greek alpha", 1, 2, 1),
    WidthTestCase::new("\u{03A3}", "greek capital sigma", 1, 2, 1),
    WidthTestCase::new("\u{0414}", "cyrillic De", 1, 2, 1),
    WidthTestCase::new("\u{2163}", "roman numeral four", 1, 2, 1),
    WidthTestCase::new("\u{2192}", "rightwards arrow", 1, 2, 1),
    WidthTestCase::new("\u{266A}", "eighth note", 1, 2, 1),
    WidthTestCase::new("\u{2605}", "black star", 1, 2, 1),
    WidthTestCase::new("\u{25CF}", "black circle", 1, 2, 1),
];

const SEQUENCES: &[WidthTestCase] = &[
    WidthTestCase::new("e\u{0301}", "e with acute", 1, 1, 1),
    WidthTestCase::new("\u{0301}", "lone combining mark", 0, 0, 0),
    WidthTestCase::new("\u{1F1FA}\u{1F1F8}", "flag", 2, 2, 2),
    WidthTestCase::new(
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}",
        "family ZWJ sequence",
        2,
        2,
        6,
    ),
    WidthTestCase::new("\u{1F44D}\u{1F3FD}", "thumbs up, medium skin tone", 2, 2, 4),
    WidthTestCase::new("\u{270B}\u{1F3FD}", "raised hand, medium skin tone", 2, 2, 4),
    WidthTestCase::new("\u{261D}\u{1F3FB}", "index pointing up, light skin tone", 2, 2, 3),
    WidthTestCase::new("\u{1F3FD}", "lone skin tone modifier", 2, 2, 2),
    WidthTestCase::new("\u{115F}", "hangul choseong filler", 0, 0, 0),
    WidthTestCase::new("", "empty", 0, 0, 0),
];

fn check(cases: &[WidthTestCase]) {
    let calc = WidthCalculator::default();
    for case in cases {
        assert_eq!(
            calc.text_width(case.input, WidthMode::Narrow),
            case.narrow,
            "{} ({:?}) narrow",
            case.description,
            case.input
        );
        assert_eq!(
            calc.text_width(case.input, WidthMode::Wide),
            case.wide,
            "{} ({:?}) wide",
            case.description,
            case.input
        );
        assert_eq!(
            calc.naive_text_width(case.input, WidthMode::Narrow),
            case.naive,
            "{} ({:?}) naive",
            case.description,
            case.input
        );
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn plain_corpus() {
    check(PLAIN);
}

#[test]
fn icon_corpus() {
    check(ICONS);
}

#[test]
fn ambiguous_corpus() {
    check(AMBIGUOUS);
}

#[test]
fn sequence_corpus() {
    check(SEQUENCES);
}

#[test]
fn stripping_selectors_restores_text_presentation_width() {
    let calc = WidthCalculator::default();
    for case in ICONS {
        let stripped = strip_emoji_selector(case.input);
        assert!(!stripped.contains('\u{FE0F}'));
        assert!(
            calc.text_width(&stripped, WidthMode::Narrow) <= case.narrow,
            "{}",
            case.description
        );
    }
    assert_eq!(calc.text_width(&strip_emoji_selector("\u{2699}\u{FE0F}"), WidthMode::Narrow), 1);
}

#[test]
fn metrics_row_for_each_icon() {
    let calc = WidthCalculator::default();
    for case in ICONS.iter().take(7) {
        let m = StringMetrics::measure(case.input, &calc, WidthMode::Narrow);
        assert_eq!(m.clusters, 1, "{}", case.description);
        assert_eq!(m.cluster_width, case.narrow);
        assert_eq!(m.naive_width, case.naive);
        assert_eq!(m.has_emoji_selector, case.input.contains('\u{FE0F}'));
        assert_eq!(m.bytes, case.input.len());
    }
}

#[test]
fn cluster_count_matches_corpus() {
    assert_eq!(cluster_count("\u{2699}\u{FE0F} Settings"), 10);
    assert_eq!(cluster_count("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"), 1);
}

#[test]
fn skin_tone_sequences_are_single_clusters() {
    let calc = WidthCalculator::default();
    for text in ["\u{1F44D}\u{1F3FD}", "\u{270B}\u{1F3FD}"] {
        assert_eq!(cluster_count(text), 1, "{text:?}");
        let m = StringMetrics::measure(text, &calc, WidthMode::Narrow);
        assert_eq!(m.cluster_width, 2);
        assert_eq!(m.naive_width, 4);
    }
    assert_eq!(cluster_count("\u{1F3FD}x"), 2);
}
