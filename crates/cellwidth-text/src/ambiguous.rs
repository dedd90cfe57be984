#![forbid(unsafe_code)]

//! East Asian Ambiguous width table.
//!
//! The built-in table is the Unicode `EastAsianWidth=A` set as carried by
//! `unicode-width`: every codepoint that is one column normally and two
//! columns in a CJK context. Terminals disagree about a few of these, so the
//! table can be widened or narrowed with explicit codepoint ranges, either in
//! code or through `CELLWIDTH_AMBIGUOUS_EXTRA` / `CELLWIDTH_AMBIGUOUS_EXCLUDE`.
//!
//! Range lists look like `0391-03A9, U+2605, 25CF`.

use cellwidth_core::env::{ENV_AMBIGUOUS_EXCLUDE, ENV_AMBIGUOUS_EXTRA, env_nonempty};
use unicode_width::UnicodeWidthChar;

/// Errors from parsing a codepoint range list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmbiguousTableError {
    /// An item was not `HEX` or `HEX-HEX`.
    InvalidRange(String),
    /// A bound was not a hexadecimal codepoint in `0..=10FFFF`.
    InvalidCodepoint(String),
    /// The range ends before it starts.
    Reversed { start: u32, end: u32 },
}

impl std::fmt::Display for AmbiguousTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange(item) => write!(f, "invalid codepoint range {item:?}"),
            Self::InvalidCodepoint(item) => write!(f, "invalid codepoint {item:?}"),
            Self::Reversed { start, end } => {
                write!(f, "codepoint range U+{start:04X}-U+{end:04X} is reversed")
            }
        }
    }
}

impl std::error::Error for AmbiguousTableError {}

/// Inclusive range of codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodepointRange {
    start: u32,
    end: u32,
}

impl CodepointRange {
    /// Range `start..=end`.
    pub fn new(start: u32, end: u32) -> Result<Self, AmbiguousTableError> {
        if start > end {
            return Err(AmbiguousTableError::Reversed { start, end });
        }
        if end > char::MAX as u32 {
            return Err(AmbiguousTableError::InvalidCodepoint(format!("{end:X}")));
        }
        Ok(Self { start, end })
    }

    /// Range holding one codepoint.
    #[must_use]
    pub const fn single(c: char) -> Self {
        Self {
            start: c as u32,
            end: c as u32,
        }
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, c: char) -> bool {
        let u = c as u32;
        self.start <= u && u <= self.end
    }

    /// Parse a comma-separated range list. Blank items are skipped.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, AmbiguousTableError> {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Self::parse_item)
            .collect()
    }

    fn parse_item(item: &str) -> Result<Self, AmbiguousTableError> {
        let mut bounds = item.split('-');
        let (Some(first), second, None) = (bounds.next(), bounds.next(), bounds.next()) else {
            return Err(AmbiguousTableError::InvalidRange(item.to_string()));
        };
        let start = parse_codepoint(first)?;
        let end = match second {
            Some(bound) => parse_codepoint(bound)?,
            None => start,
        };
        Self::new(start, end)
    }
}

fn parse_codepoint(raw: &str) -> Result<u32, AmbiguousTableError> {
    let trimmed = raw.trim();
    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .unwrap_or(trimmed);
    if hex.is_empty() {
        return Err(AmbiguousTableError::InvalidCodepoint(raw.to_string()));
    }
    match u32::from_str_radix(hex, 16) {
        Ok(value) if value <= char::MAX as u32 => Ok(value),
        _ => Err(AmbiguousTableError::InvalidCodepoint(raw.to_string())),
    }
}

/// Which codepoints count as East Asian Ambiguous.
///
/// Exclusions win over additions, and additions win over the built-in set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousTable {
    builtin: bool,
    extra: Vec<CodepointRange>,
    excluded: Vec<CodepointRange>,
}

impl Default for AmbiguousTable {
    fn default() -> Self {
        Self::unicode()
    }
}

impl AmbiguousTable {
    /// The Unicode `EastAsianWidth=A` set.
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            builtin: true,
            extra: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// A table holding only the given ranges.
    #[must_use]
    pub fn from_ranges(ranges: impl IntoIterator<Item = CodepointRange>) -> Self {
        Self {
            builtin: false,
            extra: ranges.into_iter().collect(),
            excluded: Vec::new(),
        }
    }

    /// Add ranges on top of the current set.
    #[must_use]
    pub fn with_extra(mut self, ranges: impl IntoIterator<Item = CodepointRange>) -> Self {
        self.extra.extend(ranges);
        self
    }

    /// Remove ranges from the current set.
    #[must_use]
    pub fn with_excluded(mut self, ranges: impl IntoIterator<Item = CodepointRange>) -> Self {
        self.excluded.extend(ranges);
        self
    }

    /// Unicode table adjusted by the environment overrides.
    pub fn from_env_with<F>(get_env: F) -> Result<Self, AmbiguousTableError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut table = Self::unicode();
        if let Some(list) = env_nonempty(&get_env, ENV_AMBIGUOUS_EXTRA) {
            table = table.with_extra(CodepointRange::parse_list(&list)?);
        }
        if let Some(list) = env_nonempty(&get_env, ENV_AMBIGUOUS_EXCLUDE) {
            table = table.with_excluded(CodepointRange::parse_list(&list)?);
        }
        if !table.extra.is_empty() || !table.excluded.is_empty() {
            tracing::debug!(
                extra = table.extra.len(),
                excluded = table.excluded.len(),
                "ambiguous width table overridden from environment"
            );
        }
        Ok(table)
    }

    /// Whether `c` is East Asian Ambiguous under this table.
    #[must_use]
    pub fn is_ambiguous(&self, c: char) -> bool {
        if c.is_ascii() {
            return false;
        }
        if self.excluded.iter().any(|r| r.contains(c)) {
            return false;
        }
        if self.extra.iter().any(|r| r.contains(c)) {
            return true;
        }
        self.builtin && is_unicode_ambiguous(c)
    }
}

/// One column by default, two in a CJK context.
fn is_unicode_ambiguous(c: char) -> bool {
    c.width() == Some(1) && c.width_cjk() == Some(2)
}
