#![forbid(unsafe_code)]

//! Per-string diagnostics: byte, codepoint and cluster counts plus both
//! width measurements, and the FE0F-stripping workaround.

use std::borrow::Cow;

use cellwidth_core::WidthMode;

use crate::segment::cluster_count;
use crate::tables::VS16;
use crate::width::WidthCalculator;

/// Measurements of one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringMetrics {
    pub bytes: usize,
    pub codepoints: usize,
    pub clusters: usize,
    /// Sum of per-codepoint widths.
    pub naive_width: usize,
    /// Sum of per-cluster widths.
    pub cluster_width: usize,
    /// Whether U+FE0F occurs anywhere.
    pub has_emoji_selector: bool,
}

impl StringMetrics {
    #[must_use]
    pub fn measure(text: &str, calc: &WidthCalculator, mode: WidthMode) -> Self {
        Self {
            bytes: text.len(),
            codepoints: text.chars().count(),
            clusters: cluster_count(text),
            naive_width: calc.naive_text_width(text, mode),
            cluster_width: calc.text_width(text, mode),
            has_emoji_selector: text.contains(VS16),
        }
    }

    /// Cluster width minus codepoint count.
    ///
    /// Positive when wide glyphs outnumber zero-width codepoints; a bare
    /// `⚙️` has drift 0 even though a codepoint-counting layout misplaces it.
    #[must_use]
    pub fn drift(&self) -> isize {
        self.cluster_width as isize - self.codepoints as isize
    }

    /// Naive width minus cluster width. Nonzero means per-codepoint placement
    /// would shift everything after this string.
    #[must_use]
    pub fn naive_excess(&self) -> isize {
        self.naive_width as isize - self.cluster_width as isize
    }
}

/// Remove every U+FE0F, borrowing when there is none.
#[must_use]
pub fn strip_emoji_selector(text: &str) -> Cow<'_, str> {
    if text.contains(VS16) {
        Cow::Owned(text.chars().filter(|&c| c != VS16).collect())
    } else {
        Cow::Borrowed(text)
    }
}
