#![forbid(unsafe_code)]

//! Strings the diagnostic scenes draw.

/// A labelled sample string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub text: &'static str,
}

impl Sample {
    const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }
}

/// Icons seen in real file-manager and settings UIs.
///
/// Six carry U+FE0F after a text-default base; `⛭` has no selector and
/// `📦` is emoji by default.
pub const ICONS: [Sample; 8] = [
    Sample::new("Gear", "\u{2699}\u{FE0F}"),
    Sample::new("Frame", "\u{1F5BC}\u{FE0F}"),
    Sample::new("Trash", "\u{1F5D1}\u{FE0F}"),
    Sample::new("Left", "\u{2B05}\u{FE0F}"),
    Sample::new("Right", "\u{27A1}\u{FE0F}"),
    Sample::new("Info", "\u{2139}\u{FE0F}"),
    Sample::new("TextGear", "\u{26ED}"),
    Sample::new("Package", "\u{1F4E6}"),
];

/// Characters whose width follows the East-Asian-Width mode.
pub const AMBIGUOUS: [Sample; 8] = [
    Sample::new("Greek \u{03B1}", "\u{03B1}"),
    Sample::new("Greek \u{03A3}", "\u{03A3}"),
    Sample::new("Cyrillic \u{0414}", "\u{0414}"),
    Sample::new("Roman \u{2163}", "\u{2163}"),
    Sample::new("Arrow \u{2192}", "\u{2192}"),
    Sample::new("Music \u{266A}", "\u{266A}"),
    Sample::new("Star \u{2605}", "\u{2605}"),
    Sample::new("Circle \u{25CF}", "\u{25CF}"),
];

/// Box titles that start with an icon.
pub const TITLES: [&str; 4] = [
    "\u{2699}\u{FE0F} Settings",
    "\u{1F5BC}\u{FE0F} Images",
    "\u{1F5D1}\u{FE0F} Trash",
    "\u{1F4E6} Packages",
];
