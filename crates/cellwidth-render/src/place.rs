#![forbid(unsafe_code)]

//! Cluster placement and cursor advance.
//!
//! [`TextPlacer::place`] walks a string, sends one [`Placement`] per unit to a
//! [`CellWriter`], advances the cursor by that unit's width, and returns the
//! column after the last unit so an icon and its label can be chained. Text
//! that runs past the last representable column is an error, never a silent
//! cut.
//!
//! What a "unit" is depends on the [`PlacementStrategy`]:
//!
//! | Strategy         | Unit            | Width source                          |
//! |------------------|-----------------|---------------------------------------|
//! | `Clusters`       | grapheme cluster| [`WidthCalculator::cluster_width`]    |
//! | `Naive`          | codepoint       | [`WidthCalculator::codepoint_width`]  |
//! | `StripSelectors` | cluster, after removing every U+FE0F |  cluster width   |
//!
//! Only `Clusters` is correct. `Naive` reproduces the per-codepoint
//! renderer bug and `StripSelectors` the usual workaround for it, so the
//! three can be drawn side by side.
//!
//! # Example
//! ```
//! use cellwidth_core::WidthMode;
//! use cellwidth_render::{CellStyle, PlacementStrategy, RecordingWriter, TextPlacer};
//!
//! let mut out = RecordingWriter::new();
//! let placer = TextPlacer::new(PlacementStrategy::Clusters, WidthMode::Narrow);
//! let end = placer.place(&mut out, "\u{2699}\u{FE0F}", 0, 0, CellStyle::PLAIN);
//! assert_eq!(end, Ok(2));
//! assert_eq!(out.len(), 1);
//!
//! let naive = TextPlacer::new(PlacementStrategy::Naive, WidthMode::Narrow);
//! assert_eq!(naive.measure("\u{2699}\u{FE0F}"), 3);
//! ```

use smallvec::SmallVec;

use cellwidth_core::WidthMode;
use cellwidth_text::{
    Cluster, ColumnWidth, SegmentError, WidthCalculator, clusters, decode_utf8,
    strip_emoji_selector,
};

use crate::style::CellStyle;
use crate::writer::{CellWriter, Placement};

/// How text is split into placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlacementStrategy {
    /// One placement per grapheme cluster, measured as a whole.
    #[default]
    Clusters,
    /// One placement per codepoint, each measured alone.
    Naive,
    /// Drop every U+FE0F, then place by cluster.
    StripSelectors,
}

impl PlacementStrategy {
    pub const ALL: [Self; 3] = [Self::Naive, Self::Clusters, Self::StripSelectors];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clusters => "clusters",
            Self::Naive => "naive",
            Self::StripSelectors => "strip-selectors",
        }
    }
}

impl std::fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a placement stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    /// Column after the last unit that was placed.
    pub end: u16,
    /// Byte offset into the input of the first unit left unplaced.
    pub unplaced: Option<usize>,
}

impl Placed {
    /// Every unit of the input was placed.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.unplaced.is_none()
    }
}

/// Why [`TextPlacer::place`] or [`TextPlacer::place_utf8`] failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// Input bytes were not valid UTF-8. Nothing was placed.
    InvalidEncoding(SegmentError),
    /// The cursor would have passed `u16::MAX`.
    ///
    /// Units before byte `unplaced` were issued and end at column `end`.
    ColumnOverflow { end: u16, unplaced: usize },
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEncoding(err) => write!(f, "{err}"),
            Self::ColumnOverflow { end, unplaced } => write!(
                f,
                "column overflow at {end}: text from byte {unplaced} was not placed"
            ),
        }
    }
}

impl std::error::Error for PlaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding(err) => Some(err),
            Self::ColumnOverflow { .. } => None,
        }
    }
}

impl From<SegmentError> for PlaceError {
    fn from(err: SegmentError) -> Self {
        Self::InvalidEncoding(err)
    }
}

/// Places text for one draw pass.
///
/// The mode is fixed at construction, so build a placer from a single
/// [`WidthModeSwitch::snapshot`](cellwidth_core::WidthModeSwitch::snapshot)
/// and use it for the whole pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPlacer {
    strategy: PlacementStrategy,
    mode: WidthMode,
    calculator: WidthCalculator,
}

impl TextPlacer {
    /// Placer using the Unicode ambiguous-width table.
    #[must_use]
    pub const fn new(strategy: PlacementStrategy, mode: WidthMode) -> Self {
        Self {
            strategy,
            mode,
            calculator: WidthCalculator::unicode(),
        }
    }

    #[must_use]
    pub fn with_calculator(mut self, calculator: WidthCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Same calculator and mode, different strategy.
    #[must_use]
    pub fn with_strategy(&self, strategy: PlacementStrategy) -> Self {
        Self {
            strategy,
            ..self.clone()
        }
    }

    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> WidthMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn calculator(&self) -> &WidthCalculator {
        &self.calculator
    }

    /// Place `text` starting at `start`, returning the column after it.
    ///
    /// Empty text issues nothing and returns `Ok(start)`.
    ///
    /// # Errors
    ///
    /// [`PlaceError::ColumnOverflow`] if the cursor would pass `u16::MAX`.
    /// The units before that point have already been issued.
    pub fn place<W: CellWriter + ?Sized>(
        &self,
        writer: &mut W,
        text: &str,
        start: u16,
        row: u16,
        style: CellStyle,
    ) -> Result<u16, PlaceError> {
        let placed = self.place_clipped(writer, text, start, row, style, u16::MAX);
        match placed.unplaced {
            None => Ok(placed.end),
            Some(unplaced) => Err(PlaceError::ColumnOverflow {
                end: placed.end,
                unplaced,
            }),
        }
    }

    /// Like [`place`](Self::place) but stops before any unit whose end would
    /// pass `max_column` (exclusive right edge).
    ///
    /// The returned [`Placed`] says where the cursor stopped and, if the
    /// text did not fit, the byte offset where the rest of it begins.
    pub fn place_clipped<W: CellWriter + ?Sized>(
        &self,
        writer: &mut W,
        text: &str,
        start: u16,
        row: u16,
        style: CellStyle,
        max_column: u16,
    ) -> Placed {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "place",
            strategy = self.strategy.as_str(),
            mode = self.mode.as_str(),
            start,
            row,
            bytes = text.len()
        );
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let mut cursor = start;
        let unplaced = self.for_each_unit(text, |primary, combining, width| {
            let Some(end) = cursor.checked_add(width.as_u16()) else {
                return false;
            };
            if end > max_column {
                return false;
            }
            writer.set_cell(&Placement {
                column: cursor,
                row,
                primary,
                combining,
                width,
                style,
            });
            cursor = end;
            true
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(end = cursor, unplaced = ?unplaced, "placed");
        Placed {
            end: cursor,
            unplaced,
        }
    }

    /// Validate `bytes` as UTF-8, then [`place`](Self::place) them.
    ///
    /// Malformed input is rejected before any placement is issued.
    ///
    /// # Errors
    ///
    /// [`PlaceError::InvalidEncoding`] for malformed input, otherwise as
    /// [`place`](Self::place).
    pub fn place_utf8<W: CellWriter + ?Sized>(
        &self,
        writer: &mut W,
        bytes: &[u8],
        start: u16,
        row: u16,
        style: CellStyle,
    ) -> Result<u16, PlaceError> {
        let text = decode_utf8(bytes)?;
        self.place(writer, text, start, row, style)
    }

    /// The advance [`place`](Self::place) would produce from column 0.
    ///
    /// Not bounded by `u16`, so it also measures text that cannot be placed.
    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        let mut total = 0;
        self.for_each_unit(text, |_, _, width| {
            total += width.as_usize();
            true
        });
        total
    }

    /// Feed each unit of `text` to `visit` until it returns `false`.
    ///
    /// Returns the byte offset of the unit that was refused.
    fn for_each_unit<F>(&self, text: &str, mut visit: F) -> Option<usize>
    where
        F: FnMut(char, &[char], ColumnWidth) -> bool,
    {
        let mut tail: SmallVec<[char; 4]> = SmallVec::new();
        match self.strategy {
            PlacementStrategy::Naive => {
                for (offset, c) in text.char_indices() {
                    if !visit(c, &[], self.calculator.codepoint_width(c, self.mode)) {
                        return Some(offset);
                    }
                }
            }
            PlacementStrategy::Clusters => {
                for cluster in clusters(text) {
                    if !self.visit_cluster(&cluster, &mut tail, &mut visit) {
                        return Some(cluster.byte_offset());
                    }
                }
            }
            PlacementStrategy::StripSelectors => {
                for cluster in clusters(text) {
                    let stripped = strip_emoji_selector(cluster.as_str());
                    // A lone FE0F strips to nothing.
                    if stripped.is_empty() {
                        continue;
                    }
                    let unit = Cluster::new(&stripped, cluster.byte_offset());
                    if !self.visit_cluster(&unit, &mut tail, &mut visit) {
                        return Some(cluster.byte_offset());
                    }
                }
            }
        }
        None
    }

    fn visit_cluster<F>(
        &self,
        cluster: &Cluster<'_>,
        tail: &mut SmallVec<[char; 4]>,
        visit: &mut F,
    ) -> bool
    where
        F: FnMut(char, &[char], ColumnWidth) -> bool,
    {
        tail.clear();
        tail.extend(cluster.tail());
        let width = self.calculator.cluster_width(cluster, self.mode);
        visit(cluster.base(), &tail[..], width)
    }
}
