#![forbid(unsafe_code)]

//! Fixed-size cell grid.
//!
//! The `Buffer` is the in-memory screen the diagnostic scenes draw into. It
//! implements [`CellWriter`], so any [`TextPlacer`](crate::place::TextPlacer)
//! strategy can target it directly.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Every wide glyph is followed by exactly one continuation cell
//! 4. No continuation cell exists without its head
//! 5. The scissor stack always has at least one element

use cellwidth_core::geometry::Rect;

use crate::cell::{Cell, CellContent};
use crate::writer::{CellWriter, Placement};

/// A 2D grid of cells.
///
/// # Example
///
/// ```
/// use cellwidth_render::buffer::Buffer;
/// use cellwidth_render::cell::Cell;
/// use cellwidth_render::style::CellStyle;
///
/// let mut buffer = Buffer::new(10, 2);
/// buffer.set(0, 0, Cell::from_char('H', CellStyle::PLAIN));
/// assert_eq!(buffer.get(0, 0).and_then(|c| c.content.primary()), Some('H'));
/// ```
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    scissor_stack: Vec<Rect>,
}

impl Buffer {
    /// Create a blank buffer.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            scissor_stack: vec![Rect::from_size(width, height)],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Cells of row `y`, or an empty slice past the bottom edge.
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Clear the wide glyph that `(x, y)` is part of, if any.
    fn cleanup_overlap(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else { return };

        // Overwriting a wide head: drop its continuation.
        let columns = self.cells[idx].content.columns();
        if columns > 1 {
            for i in 1..columns as u16 {
                if let Some(tail_idx) = self.index(x.saturating_add(i), y)
                    && self.cells[tail_idx].is_continuation()
                {
                    self.cells[tail_idx] = Cell::default();
                }
            }
            return;
        }

        // Overwriting a continuation: drop the head that owns it.
        if self.cells[idx].is_continuation()
            && let Some(head_x) = self.owner_of(x, y)
            && let Some(head_idx) = self.index(head_x, y)
        {
            let columns = self.cells[head_idx].content.columns() as u16;
            self.cells[head_idx] = Cell::default();
            for i in 1..columns {
                if let Some(tail_idx) = self.index(head_x + i, y)
                    && self.cells[tail_idx].is_continuation()
                {
                    self.cells[tail_idx] = Cell::default();
                }
            }
        }
    }

    /// Column of the cell whose content covers `(x, y)`.
    fn owner_of(&self, x: u16, y: u16) -> Option<u16> {
        let mut cx = x;
        loop {
            let cell = self.get(cx, y)?;
            if !cell.is_continuation() {
                return (cx as usize + cell.content.columns() > x as usize).then_some(cx);
            }
            cx = cx.checked_sub(1)?;
        }
    }

    /// Set the cell at `(x, y)`.
    ///
    /// - Does nothing outside the bounds or the current scissor
    /// - Writes a continuation cell after a wide glyph
    /// - A wide glyph that does not fit entirely is not written at all
    /// - Overwriting either half of a wide glyph clears the other half
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let columns = cell.content.columns().max(1) as u16;
        let scissor = self.current_scissor();
        for i in 0..columns {
            let Some(cx) = x.checked_add(i) else { return };
            if self.index(cx, y).is_none() || !scissor.contains(cx, y) {
                return;
            }
        }

        for i in 0..columns {
            self.cleanup_overlap(x + i, y);
        }

        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
        for i in 1..columns {
            if let Some(idx) = self.index(x + i, y) {
                self.cells[idx] = Cell::CONTINUATION;
            }
        }
    }

    /// Attach codepoints to the glyph covering `(x, y)`.
    ///
    /// A blank target becomes a zero-width glyph holding just these
    /// codepoints.
    fn attach(
        &mut self,
        x: u16,
        y: u16,
        chars: impl IntoIterator<Item = char>,
        placement: &Placement<'_>,
    ) {
        if !self.current_scissor().contains(x, y) {
            return;
        }
        let Some(owner) = self.owner_of(x, y) else { return };
        let Some(idx) = self.index(owner, y) else { return };
        let mut chars = chars.into_iter();
        let cell = &mut self.cells[idx];
        match &mut cell.content {
            CellContent::Glyph { combining, .. } => combining.extend(chars),
            content => {
                if let Some(primary) = chars.next() {
                    *content = CellContent::Glyph {
                        primary,
                        combining: chars.collect(),
                        width: placement.width,
                    };
                    cell.style = placement.style;
                }
            }
        }
    }

    // ========== Scissor Stack ==========

    /// Push a clipping region; the effective scissor is the intersection of
    /// all pushed regions.
    pub fn push_scissor(&mut self, rect: Rect) {
        let intersected = self.current_scissor().intersection(&rect);
        self.scissor_stack.push(intersected);
    }

    /// Pop a clipping region. The base region is never popped.
    pub fn pop_scissor(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }

    #[inline]
    pub fn current_scissor(&self) -> Rect {
        self.scissor_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.bounds())
    }
}

impl CellWriter for Buffer {
    /// Wide and narrow placements become cells; zero-width placements attach
    /// to the glyph owning the previous column (or the cursor cell at
    /// column 0).
    fn set_cell(&mut self, placement: &Placement<'_>) {
        let chars = std::iter::once(placement.primary).chain(placement.combining.iter().copied());
        if placement.width.is_zero() {
            let target = placement.column.saturating_sub(1);
            self.attach(target, placement.row, chars, placement);
            return;
        }
        let cell = Cell::glyph(
            placement.primary,
            placement.combining,
            placement.width,
            placement.style,
        );
        self.set(placement.column, placement.row, cell);
    }
}
