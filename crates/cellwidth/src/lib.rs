#![forbid(unsafe_code)]

//! cellwidth public facade crate.
//!
//! Re-exports the segmenter, width calculator and placers from the internal
//! crates, plus a prelude for day-to-day usage.
//!
//! ```
//! use cellwidth::prelude::*;
//!
//! let placer = TextPlacer::new(PlacementStrategy::Clusters, WidthMode::Narrow);
//! let mut out = RecordingWriter::new();
//! let end = placer.place(&mut out, "\u{2699}\u{FE0F}", 0, 0, CellStyle::PLAIN);
//! assert_eq!(end, Ok(2));
//! assert_eq!(out.len(), 1);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use cellwidth_core::geometry::Rect;
pub use cellwidth_core::{WidthMode, WidthModeSwitch};

// --- Text re-exports -------------------------------------------------------

pub use cellwidth_text::{
    AmbiguousTable, AmbiguousTableError, Cluster, Clusters, ColumnWidth, SegmentError,
    StringMetrics, WidthCache, WidthCalculator, cluster_width, clusters, clusters_from_utf8,
    display_width, strip_emoji_selector,
};

// --- Render re-exports -----------------------------------------------------

pub use cellwidth_render::{
    BorderChars, Buffer, Cell, CellContent, CellStyle, CellWriter, Draw, PackedRgba, PlaceError,
    Placed, Placement, PlacementRecord, PlacementStrategy, RecordingWriter, StyleFlags, TextPlacer,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input bytes were not valid UTF-8.
    Encoding(SegmentError),
    /// An ambiguous-width override could not be parsed.
    AmbiguousTable(AmbiguousTableError),
    /// Text ran past the last representable column.
    ColumnOverflow { end: u16, unplaced: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(err) => write!(f, "{err}"),
            Self::AmbiguousTable(err) => write!(f, "{err}"),
            Self::ColumnOverflow { end, unplaced } => {
                write!(f, "column overflow at {end}: text from byte {unplaced} was not placed")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encoding(err) => Some(err),
            Self::AmbiguousTable(err) => Some(err),
            Self::ColumnOverflow { .. } => None,
        }
    }
}

impl From<SegmentError> for Error {
    fn from(err: SegmentError) -> Self {
        Self::Encoding(err)
    }
}

impl From<PlaceError> for Error {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::InvalidEncoding(err) => Self::Encoding(err),
            PlaceError::ColumnOverflow { end, unplaced } => Self::ColumnOverflow { end, unplaced },
        }
    }
}

impl From<AmbiguousTableError> for Error {
    fn from(err: AmbiguousTableError) -> Self {
        Self::AmbiguousTable(err)
    }
}

/// Standard result type for cellwidth APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Buffer, CellStyle, CellWriter, Cluster, ColumnWidth, Draw, Error, PlaceError, Placed,
        PlacementStrategy, RecordingWriter, Result, TextPlacer, WidthCalculator, WidthMode,
        WidthModeSwitch,
    };

    pub use crate::{core, render, text};
}

pub use cellwidth_core as core;
pub use cellwidth_render as render;
pub use cellwidth_text as text;
