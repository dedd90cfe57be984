#![forbid(unsafe_code)]

//! Terminal column width of clusters and codepoints.
//!
//! # Cluster rules
//!
//! A cluster's width is decided from its base codepoint and, for emoji
//! presentation, the codepoint right after it:
//!
//! 1. A base that never occupies a column (control, combining mark, selector,
//!    joiner) makes the whole cluster zero width.
//! 2. An emoji-capable base followed by U+FE0F is two columns, in both modes.
//! 3. A regional indicator pair (a flag) is two columns.
//! 4. An East Asian Ambiguous base takes the mode's ambiguous width.
//! 5. Anything else takes the base's standard width, capped at two.
//!
//! # Per-codepoint rules
//!
//! [`WidthCalculator::codepoint_width`] measures a codepoint in isolation,
//! the way a per-rune renderer sees it. There a lone U+FE0F is taken as a
//! request for an emoji cell and counts two columns, and the other variation
//! selectors count one. Summing those is exactly how the FE0F drift arises.

use cellwidth_core::WidthMode;
use unicode_width::UnicodeWidthChar;

use crate::ambiguous::AmbiguousTable;
use crate::cluster::Cluster;
use crate::segment::clusters;
use crate::tables::{
    VS16, is_emoji_capable, is_emoji_modifier, is_regional_indicator, is_variation_selector,
    is_zero_width_codepoint,
};

/// Number of terminal columns a cluster occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum ColumnWidth {
    /// Attaches to the previous cell.
    #[default]
    Zero = 0,
    /// One column.
    Narrow = 1,
    /// Two columns: a head cell plus a continuation.
    Wide = 2,
}

impl ColumnWidth {
    /// Width for a column count, capped at two.
    #[inline]
    #[must_use]
    pub const fn from_columns(columns: usize) -> Self {
        match columns {
            0 => Self::Zero,
            1 => Self::Narrow,
            _ => Self::Wide,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }

    #[inline]
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }
}

impl From<ColumnWidth> for usize {
    fn from(width: ColumnWidth) -> Self {
        width.as_usize()
    }
}

impl From<ColumnWidth> for u16 {
    fn from(width: ColumnWidth) -> Self {
        width.as_u16()
    }
}

/// Measures clusters and codepoints against an ambiguous-width table.
///
/// Widths are a pure function of the input, the table and the mode, so the
/// calculator is freely shareable across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidthCalculator {
    ambiguous: AmbiguousTable,
}

impl WidthCalculator {
    #[must_use]
    pub const fn new(ambiguous: AmbiguousTable) -> Self {
        Self { ambiguous }
    }

    /// Calculator using the Unicode ambiguous table.
    #[must_use]
    pub const fn unicode() -> Self {
        Self::new(AmbiguousTable::unicode())
    }

    #[must_use]
    pub fn ambiguous_table(&self) -> &AmbiguousTable {
        &self.ambiguous
    }

    /// Width of one grapheme cluster.
    #[must_use]
    pub fn cluster_width(&self, cluster: &Cluster<'_>, mode: WidthMode) -> ColumnWidth {
        let base = cluster.base();

        if base.is_ascii() {
            // Multi-codepoint ASCII clusters are CR LF or ASCII plus marks;
            // keycaps need FE0F and fall through below.
            if !(cluster.second() == Some(VS16) && is_emoji_capable(base)) {
                return ascii_width(base);
            }
        }

        if is_zero_width_base(base) {
            return ColumnWidth::Zero;
        }

        let second = cluster.second();
        if second == Some(VS16) && is_emoji_capable(base) {
            return ColumnWidth::Wide;
        }
        // Skin tones force emoji presentation on text-default bases like U+261D.
        if second.is_some_and(is_emoji_modifier) && is_emoji_capable(base) {
            return ColumnWidth::Wide;
        }
        if is_regional_indicator(base) && second.is_some_and(is_regional_indicator) {
            return ColumnWidth::Wide;
        }
        if self.ambiguous.is_ambiguous(base) {
            return ColumnWidth::from_columns(mode.ambiguous_width().into());
        }
        standard_width(base)
    }

    /// Width of a codepoint measured on its own.
    #[must_use]
    pub fn codepoint_width(&self, c: char, mode: WidthMode) -> ColumnWidth {
        if c.is_ascii() {
            return ascii_width(c);
        }
        if c == VS16 {
            return ColumnWidth::Wide;
        }
        if is_variation_selector(c) {
            return ColumnWidth::Narrow;
        }
        if is_zero_width_base(c) {
            return ColumnWidth::Zero;
        }
        if self.ambiguous.is_ambiguous(c) {
            return ColumnWidth::from_columns(mode.ambiguous_width().into());
        }
        standard_width(c)
    }

    /// Total cluster-aware width of `text`.
    #[must_use]
    pub fn text_width(&self, text: &str, mode: WidthMode) -> usize {
        if text.is_ascii() {
            return text.bytes().filter(|b| is_printable_ascii(*b)).count();
        }
        clusters(text)
            .map(|c| self.cluster_width(&c, mode).as_usize())
            .sum()
    }

    /// Total per-codepoint width of `text`.
    #[must_use]
    pub fn naive_text_width(&self, text: &str, mode: WidthMode) -> usize {
        text.chars()
            .map(|c| self.codepoint_width(c, mode).as_usize())
            .sum()
    }
}

/// Cluster width under the Unicode ambiguous table.
#[must_use]
pub fn cluster_width(cluster: &Cluster<'_>, mode: WidthMode) -> ColumnWidth {
    WidthCalculator::unicode().cluster_width(cluster, mode)
}

/// Cluster-aware width of `text` under the Unicode ambiguous table.
#[must_use]
pub fn display_width(text: &str, mode: WidthMode) -> usize {
    WidthCalculator::unicode().text_width(text, mode)
}

#[inline]
fn is_printable_ascii(b: u8) -> bool {
    (0x20..0x7F).contains(&b)
}

#[inline]
fn ascii_width(c: char) -> ColumnWidth {
    if is_printable_ascii(c as u8) {
        ColumnWidth::Narrow
    } else {
        ColumnWidth::Zero
    }
}

#[inline]
fn is_zero_width_base(c: char) -> bool {
    is_zero_width_codepoint(c) || c.width() == Some(0)
}

#[inline]
fn standard_width(c: char) -> ColumnWidth {
    ColumnWidth::from_columns(c.width().unwrap_or(0))
}
