#![forbid(unsafe_code)]

//! Box drawing on a [`Buffer`].
//!
//! Borders are single-column box-drawing characters written straight into
//! cells. Titles are text, so they go through a [`TextPlacer`] and inherit
//! whatever width behavior its strategy has; a naive placer visibly pushes
//! the title into the top-right corner.

use cellwidth_core::geometry::Rect;

use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::place::TextPlacer;
use crate::style::CellStyle;

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Simple box-drawing characters (U+250x).
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Plain ASCII, for terminals without box-drawing glyphs.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

/// Extension trait for drawing on a Buffer.
pub trait Draw {
    /// Draw a horizontal run of `c`.
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, c: char, style: CellStyle);

    /// Draw a vertical run of `c`.
    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, c: char, style: CellStyle);

    /// Draw a border on the outermost cells of `rect`.
    fn draw_border(&mut self, rect: Rect, chars: BorderChars, style: CellStyle);

    /// Draw a square border with `title` set into the top edge as
    /// `┌─ Title ─┐`.
    ///
    /// The title starts two columns in, padded by one space on each side,
    /// and is clipped so it never overwrites the top-right corner. Returns
    /// the column after the title (before its trailing space).
    fn draw_titled_border(
        &mut self,
        rect: Rect,
        title: &str,
        placer: &TextPlacer,
        style: CellStyle,
    ) -> u16;

    /// Blank every cell inside `rect`.
    fn clear_rect(&mut self, rect: Rect);
}

impl Draw for Buffer {
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, c: char, style: CellStyle) {
        let cell = Cell::from_char(c, style);
        for i in 0..width {
            self.set(x.saturating_add(i), y, cell.clone());
        }
    }

    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, c: char, style: CellStyle) {
        let cell = Cell::from_char(c, style);
        for i in 0..height {
            self.set(x, y.saturating_add(i), cell.clone());
        }
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, style: CellStyle) {
        if rect.is_empty() {
            return;
        }

        self.draw_horizontal_line(rect.left(), rect.top(), rect.width, chars.horizontal, style);
        if rect.height > 1 {
            self.draw_horizontal_line(
                rect.left(),
                rect.bottom() - 1,
                rect.width,
                chars.horizontal,
                style,
            );
        }

        if rect.height > 2 {
            self.draw_vertical_line(
                rect.left(),
                rect.top() + 1,
                rect.height - 2,
                chars.vertical,
                style,
            );
            if rect.width > 1 {
                self.draw_vertical_line(
                    rect.right() - 1,
                    rect.top() + 1,
                    rect.height - 2,
                    chars.vertical,
                    style,
                );
            }
        }

        // Corners
        self.set(rect.left(), rect.top(), Cell::from_char(chars.top_left, style));
        if rect.width > 1 {
            self.set(
                rect.right() - 1,
                rect.top(),
                Cell::from_char(chars.top_right, style),
            );
        }
        if rect.height > 1 {
            self.set(
                rect.left(),
                rect.bottom() - 1,
                Cell::from_char(chars.bottom_left, style),
            );
        }
        if rect.width > 1 && rect.height > 1 {
            self.set(
                rect.right() - 1,
                rect.bottom() - 1,
                Cell::from_char(chars.bottom_right, style),
            );
        }
    }

    fn draw_titled_border(
        &mut self,
        rect: Rect,
        title: &str,
        placer: &TextPlacer,
        style: CellStyle,
    ) -> u16 {
        self.draw_border(rect, BorderChars::SQUARE, style);

        let title_x = rect.left().saturating_add(2);
        // Room for "─ " before the title and " ┐" after it.
        if title.is_empty() || rect.width < 6 {
            return title_x;
        }
        let max_column = rect.right() - 2;
        let space = Cell::from_char(' ', style);

        self.set(title_x, rect.top(), space.clone());
        let end = placer
            .place_clipped(self, title, title_x + 1, rect.top(), style, max_column)
            .end;
        if end < rect.right() - 1 {
            self.set(end, rect.top(), space);
        }
        end
    }

    fn clear_rect(&mut self, rect: Rect) {
        let clipped = rect.intersection(&self.bounds());
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                self.set(x, y, Cell::default());
            }
        }
    }
}
