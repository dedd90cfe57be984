#![forbid(unsafe_code)]

//! The grapheme cluster type.

use std::ops::Range;
use std::str::Chars;

use crate::tables::VS16;

/// One user-perceived character: a base codepoint plus any trailing
/// combining or modifier codepoints.
///
/// A `Cluster` borrows its text from the segmented input and remembers where
/// in that input it started. It is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cluster<'a> {
    text: &'a str,
    base: char,
    offset: usize,
}

impl<'a> Cluster<'a> {
    /// Wrap a cluster slice that starts at byte `offset` of its source.
    ///
    /// Normally clusters come from [`clusters`](crate::segment::clusters);
    /// constructing one by hand treats the first `char` of `text` as the base
    /// and everything after it as the combining tail.
    ///
    /// # Panics
    ///
    /// Panics if `text` is empty. An empty cluster means the segmentation
    /// rules are broken and there is no sensible value to continue with.
    #[must_use]
    pub fn new(text: &'a str, offset: usize) -> Self {
        let Some(base) = text.chars().next() else {
            panic!("empty grapheme cluster at byte {offset}");
        };
        Self { text, base, offset }
    }

    /// The cluster's text.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// The base (first) codepoint.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> char {
        self.base
    }

    /// Codepoints after the base: combining marks, selectors, ZWJ and
    /// whatever they join.
    #[inline]
    pub fn tail(&self) -> Chars<'a> {
        self.text[self.base.len_utf8()..].chars()
    }

    /// The tail collected into a vector.
    #[must_use]
    pub fn tail_vec(&self) -> Vec<char> {
        self.tail().collect()
    }

    /// The codepoint immediately after the base, if any.
    #[inline]
    #[must_use]
    pub fn second(&self) -> Option<char> {
        self.tail().next()
    }

    /// All codepoints, base first.
    #[inline]
    pub fn codepoints(&self) -> Chars<'a> {
        self.text.chars()
    }

    /// Number of codepoints (always at least one).
    #[must_use]
    pub fn codepoint_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Always `false`; clusters hold at least their base.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether the cluster is just its base.
    #[inline]
    #[must_use]
    pub fn is_single_codepoint(&self) -> bool {
        self.text.len() == self.base.len_utf8()
    }

    /// Whether an emoji presentation selector (U+FE0F) appears anywhere in
    /// the tail.
    #[must_use]
    pub fn has_emoji_selector(&self) -> bool {
        self.tail().any(|c| c == VS16)
    }

    /// Byte offset of the cluster within the segmented input.
    #[inline]
    #[must_use]
    pub const fn byte_offset(&self) -> usize {
        self.offset
    }

    /// Length of the cluster in bytes.
    #[inline]
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Byte range of the cluster within the segmented input.
    #[inline]
    #[must_use]
    pub const fn byte_range(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }
}

impl std::fmt::Display for Cluster<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}
