#![forbid(unsafe_code)]

//! Placement of grapheme clusters into terminal cells.
//!
//! # Role in cellwidth
//! `cellwidth-render` turns text into cell writes. The width decisions live
//! in `cellwidth-text`; this crate applies them:
//!
//! - [`TextPlacer`] walks text with one of three [`PlacementStrategy`]s and
//!   advances a caller-owned cursor
//! - [`CellWriter`] is the only side-effect seam; [`RecordingWriter`] keeps
//!   placements for inspection
//! - [`Buffer`] is an in-memory grid with wide-glyph continuation cells
//! - [`Draw`] adds borders and titled boxes on top of `Buffer`
//!
//! # Tracing
//! With the `tracing` feature every `place` call opens a `place` span
//! carrying the strategy, mode and start column.

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod place;
pub mod style;
pub mod writer;

pub use buffer::Buffer;
pub use cell::{Cell, CellContent};
pub use drawing::{BorderChars, Draw};
pub use place::{PlaceError, Placed, PlacementStrategy, TextPlacer};
pub use style::{CellStyle, PackedRgba, StyleFlags};
pub use writer::{CellWriter, Placement, PlacementRecord, RecordingWriter};
