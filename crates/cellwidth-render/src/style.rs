#![forbid(unsafe_code)]

//! Cell colors and attribute flags.
//!
//! The placement core never looks inside a [`CellStyle`]; it is carried from
//! the caller to the cell writer untouched.

/// A color packed as `0xRRGGBBAA`.
///
/// Alpha 0 ([`PackedRgba::DEFAULT`]) means "terminal default color".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// The terminal's own foreground.
    pub const DEFAULT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(205, 49, 49);
    pub const GREEN: Self = Self::rgb(13, 188, 121);
    pub const YELLOW: Self = Self::rgb(229, 229, 16);
    pub const BLUE: Self = Self::rgb(36, 114, 200);
    pub const MAGENTA: Self = Self::rgb(188, 63, 188);
    pub const CYAN: Self = Self::rgb(17, 168, 205);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Opaque RGB color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether this is the terminal default rather than an explicit color.
    #[inline]
    pub const fn is_default(self) -> bool {
        self.a() == 0
    }
}

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        /// Reverse video (swap fg/bg).
        const REVERSE   = 0b0001_0000;
    }
}

/// Foreground color plus attribute flags for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CellStyle {
    pub fg: PackedRgba,
    pub flags: StyleFlags,
}

impl CellStyle {
    /// Default color, no attributes.
    pub const PLAIN: Self = Self {
        fg: PackedRgba::DEFAULT,
        flags: StyleFlags::empty(),
    };

    #[inline]
    pub const fn new(fg: PackedRgba, flags: StyleFlags) -> Self {
        Self { fg, flags }
    }

    /// Plain style with an explicit foreground.
    #[inline]
    pub const fn fg(fg: PackedRgba) -> Self {
        Self::new(fg, StyleFlags::empty())
    }

    #[must_use]
    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.with_flags(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.with_flags(StyleFlags::REVERSE)
    }

    #[inline]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_default() && self.flags.is_empty()
    }
}
