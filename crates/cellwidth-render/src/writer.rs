#![forbid(unsafe_code)]

//! The cell writer seam.
//!
//! Placement code never touches a terminal. It hands one [`Placement`] per
//! cluster (or per codepoint, for the naive strategy) to a [`CellWriter`],
//! which can be a real screen, the in-memory [`Buffer`](crate::buffer::Buffer),
//! or a [`RecordingWriter`] in tests.

use smallvec::SmallVec;

use cellwidth_text::ColumnWidth;

use crate::style::CellStyle;

/// One instruction to the writer: draw `primary` (with `combining` attached)
/// at `(column, row)`, spanning `width` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub column: u16,
    pub row: u16,
    pub primary: char,
    pub combining: &'a [char],
    pub width: ColumnWidth,
    pub style: CellStyle,
}

/// Receives placements.
///
/// Later placements at the same `(column, row)` overwrite earlier ones.
/// Implementations take `width` as given and never re-measure.
pub trait CellWriter {
    fn set_cell(&mut self, placement: &Placement<'_>);
}

impl<W: CellWriter + ?Sized> CellWriter for &mut W {
    #[inline]
    fn set_cell(&mut self, placement: &Placement<'_>) {
        (**self).set_cell(placement);
    }
}

/// An owned copy of a [`Placement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRecord {
    pub column: u16,
    pub row: u16,
    pub primary: char,
    pub combining: SmallVec<[char; 4]>,
    pub width: ColumnWidth,
    pub style: CellStyle,
}

impl From<&Placement<'_>> for PlacementRecord {
    fn from(p: &Placement<'_>) -> Self {
        Self {
            column: p.column,
            row: p.row,
            primary: p.primary,
            combining: SmallVec::from_slice(p.combining),
            width: p.width,
            style: p.style,
        }
    }
}

/// Writer that keeps every placement it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    records: Vec<PlacementRecord>,
}

impl RecordingWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<PlacementRecord> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Sum of recorded widths.
    #[must_use]
    pub fn total_width(&self) -> usize {
        self.records.iter().map(|r| r.width.as_usize()).sum()
    }

    /// Recorded columns, in order.
    #[must_use]
    pub fn columns(&self) -> Vec<u16> {
        self.records.iter().map(|r| r.column).collect()
    }
}

impl CellWriter for RecordingWriter {
    fn set_cell(&mut self, placement: &Placement<'_>) {
        self.records.push(PlacementRecord::from(placement));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(column: u16, primary: char, combining: &[char]) -> Placement<'_> {
        Placement {
            column,
            row: 0,
            primary,
            combining,
            width: ColumnWidth::Narrow,
            style: CellStyle::PLAIN,
        }
    }

    #[test]
    fn records_in_order() {
        let mut w = RecordingWriter::new();
        w.set_cell(&placement(0, 'a', &[]));
        w.set_cell(&placement(1, 'e', &['\u{0301}']));
        assert_eq!(w.len(), 2);
        assert_eq!(w.columns(), vec![0, 1]);
        assert_eq!(w.records()[1].combining.as_slice(), &['\u{0301}']);
        assert_eq!(w.total_width(), 2);
    }

    #[test]
    fn mutable_reference_forwards() {
        fn write_one<W: CellWriter>(mut writer: W) {
            writer.set_cell(&placement(3, 'x', &[]));
        }
        let mut w = RecordingWriter::new();
        write_one(&mut w);
        assert_eq!(w.records()[0].column, 3);
        w.clear();
        assert!(w.is_empty());
    }
}
