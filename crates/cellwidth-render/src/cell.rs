#![forbid(unsafe_code)]

//! Grid cells.
//!
//! A cell holds either nothing, the right half of a wide glyph
//! ([`CellContent::Continuation`]), or a glyph: the base codepoint of a
//! cluster plus the codepoints that combine with it.

use smallvec::SmallVec;

use cellwidth_text::ColumnWidth;

use crate::style::CellStyle;

/// Inline storage for combining codepoints; FE0F plus a mark or two fits.
pub type Combining = SmallVec<[char; 4]>;

/// What a cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Blank.
    #[default]
    Empty,
    /// Covered by the wide glyph to its left.
    Continuation,
    /// A cluster's base codepoint and its combining tail.
    Glyph {
        primary: char,
        combining: Combining,
        width: ColumnWidth,
    },
}

impl CellContent {
    /// A glyph with no combining codepoints.
    #[must_use]
    pub fn from_char(c: char, width: ColumnWidth) -> Self {
        Self::Glyph {
            primary: c,
            combining: Combining::new(),
            width,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub const fn is_continuation(&self) -> bool {
        matches!(self, Self::Continuation)
    }

    /// Columns this content spans starting at its own cell.
    ///
    /// A zero-width glyph stranded in its own cell still takes that cell.
    #[inline]
    pub fn columns(&self) -> usize {
        match self {
            Self::Empty => 1,
            Self::Continuation => 0,
            Self::Glyph { width, .. } => width.as_usize().max(1),
        }
    }

    /// The base codepoint, if this is a glyph.
    #[inline]
    pub fn primary(&self) -> Option<char> {
        match self {
            Self::Glyph { primary, .. } => Some(*primary),
            _ => None,
        }
    }

    /// The combining codepoints (empty for non-glyphs).
    #[inline]
    pub fn combining(&self) -> &[char] {
        match self {
            Self::Glyph { combining, .. } => combining,
            _ => &[],
        }
    }

    /// Append this cell's text (base then combining) to `out`.
    pub fn push_text(&self, out: &mut String) {
        if let Self::Glyph {
            primary, combining, ..
        } = self
        {
            out.push(*primary);
            out.extend(combining.iter());
        }
    }
}

/// One grid position: content plus style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub content: CellContent,
    pub style: CellStyle,
}

impl Cell {
    /// The right half of a wide glyph.
    pub const CONTINUATION: Self = Self {
        content: CellContent::Continuation,
        style: CellStyle::PLAIN,
    };

    #[inline]
    pub const fn new(content: CellContent, style: CellStyle) -> Self {
        Self { content, style }
    }

    /// A glyph cell from a placement's parts.
    #[must_use]
    pub fn glyph(primary: char, combining: &[char], width: ColumnWidth, style: CellStyle) -> Self {
        Self {
            content: CellContent::Glyph {
                primary,
                combining: Combining::from_slice(combining),
                width,
            },
            style,
        }
    }

    /// A narrow glyph with no combining codepoints.
    #[inline]
    #[must_use]
    pub fn from_char(c: char, style: CellStyle) -> Self {
        Self::new(CellContent::from_char(c, ColumnWidth::Narrow), style)
    }

    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
