#![forbid(unsafe_code)]

//! Codepoint classification tables used by the width calculator.

/// VARIATION SELECTOR-16: request emoji presentation of the preceding base.
pub const VS16: char = '\u{FE0F}';
/// ZERO WIDTH JOINER.
pub const ZWJ: char = '\u{200D}';

/// Variation selectors (FE00–FE0F and the supplement E0100–E01EF).
#[inline]
#[must_use]
pub fn is_variation_selector(c: char) -> bool {
    matches!(c as u32, 0xFE00..=0xFE0F | 0xE0100..=0xE01EF)
}

/// Codepoints that never occupy a column: controls, combining marks,
/// variation selectors, joiners, and other default-ignorables.
///
/// U+115F HANGUL CHOSEONG FILLER is listed because it is default-ignorable
/// even though its East Asian Width is Wide.
#[inline]
#[must_use]
pub fn is_zero_width_codepoint(c: char) -> bool {
    let u = c as u32;
    matches!(u, 0x0000..=0x001F | 0x007F..=0x009F)
        || matches!(u, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF)
        || matches!(u, 0xFE20..=0xFE2F)
        || is_variation_selector(c)
        || matches!(
            u,
            0x00AD
                | 0x034F
                | 0x061C
                | 0x115F
                | 0x180E
                | 0x200B
                | 0x200C
                | 0x200D
                | 0x200E
                | 0x200F
                | 0x2060
                | 0xFEFF
        )
        || matches!(u, 0x202A..=0x202E | 0x2066..=0x2069 | 0x206A..=0x206F)
        || matches!(u, 0xE0000..=0xE007F)
}

/// Codepoints that have an emoji presentation when followed by U+FE0F.
///
/// Covers the keycap bases, the scattered Latin-1/letterlike/arrow symbols,
/// the Miscellaneous Technical, Symbols, Dingbats and Arrows blocks, and the
/// supplementary emoji planes.
#[must_use]
pub fn is_emoji_capable(c: char) -> bool {
    let u = c as u32;
    matches!(c, '#' | '*' | '0'..='9')
        || matches!(
            u,
            0x00A9
                | 0x00AE
                | 0x203C
                | 0x2049
                | 0x2122
                | 0x2139
                | 0x24C2
                | 0x25B6
                | 0x25C0
                | 0x3030
                | 0x303D
                | 0x3297
                | 0x3299
        )
        || matches!(
            u,
            0x2194..=0x2199
                | 0x21A9..=0x21AA
                | 0x2300..=0x23FF
                | 0x25AA..=0x25AB
                | 0x25FB..=0x25FE
                | 0x2600..=0x27BF
                | 0x2934..=0x2935
                | 0x2B00..=0x2BFF
                | 0x1F000..=0x1FAFF
        )
}

/// Regional indicator symbols; a pair of them forms a flag.
#[inline]
#[must_use]
pub fn is_regional_indicator(c: char) -> bool {
    matches!(c as u32, 0x1F1E6..=0x1F1FF)
}

/// Fitzpatrick skin-tone modifiers.
#[inline]
#[must_use]
pub fn is_emoji_modifier(c: char) -> bool {
    matches!(c as u32, 0x1F3FB..=0x1F3FF)
}
