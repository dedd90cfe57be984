#![forbid(unsafe_code)]

//! East-Asian-Width rendering mode.
//!
//! [`WidthMode`] is the value the width calculator consumes. It only changes
//! how East Asian *Ambiguous* characters (Greek, Cyrillic, arrows, stars,
//! box-drawing neighbours) are measured; combining marks and the FE0F emoji
//! presentation rule are unaffected.
//!
//! [`WidthModeSwitch`] is the process-wide toggle. A draw pass takes one
//! [`snapshot`](WidthModeSwitch::snapshot) up front and threads the value
//! through every call, so a toggle landing mid-pass never produces a frame
//! measured with two different modes.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::env::{ENV_EAST_ASIAN_WIDTH, env_bool};

/// How ambiguous-width characters are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidthMode {
    /// East-Asian-Width off: ambiguous characters are one column.
    #[default]
    Narrow,
    /// East-Asian-Width on: ambiguous characters are two columns.
    Wide,
}

impl WidthMode {
    /// Mode for an East-Asian-Width flag value.
    #[inline]
    #[must_use]
    pub const fn from_east_asian(east_asian_width: bool) -> Self {
        if east_asian_width {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// Whether East-Asian-Width is on.
    #[inline]
    #[must_use]
    pub const fn is_east_asian(self) -> bool {
        matches!(self, Self::Wide)
    }

    /// Width in columns of an ambiguous character under this mode.
    #[inline]
    #[must_use]
    pub const fn ambiguous_width(self) -> u8 {
        match self {
            Self::Narrow => 1,
            Self::Wide => 2,
        }
    }

    /// The opposite mode.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Narrow => Self::Wide,
            Self::Wide => Self::Narrow,
        }
    }

    /// Initial mode from `CELLWIDTH_EAST_ASIAN_WIDTH`, defaulting to narrow.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        env_bool(&get_env, ENV_EAST_ASIAN_WIDTH)
            .map(Self::from_east_asian)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

impl std::fmt::Display for WidthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide, lock-free holder for the current [`WidthMode`].
///
/// One input handler writes (`set` / `toggle`); any number of draw passes
/// read via [`snapshot`](Self::snapshot).
#[derive(Debug, Default)]
pub struct WidthModeSwitch {
    east_asian: AtomicBool,
}

impl WidthModeSwitch {
    /// Create a switch holding `mode`.
    #[must_use]
    pub const fn new(mode: WidthMode) -> Self {
        Self {
            east_asian: AtomicBool::new(mode.is_east_asian()),
        }
    }

    /// Create a switch initialised from the environment.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(WidthMode::from_env_with(get_env))
    }

    /// Read the mode once for a whole draw pass.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> WidthMode {
        WidthMode::from_east_asian(self.east_asian.load(Ordering::Acquire))
    }

    /// Replace the mode.
    pub fn set(&self, mode: WidthMode) {
        self.east_asian
            .store(mode.is_east_asian(), Ordering::Release);
        crate::debug!(mode = mode.as_str(), "width mode set");
    }

    /// Flip the mode and return the new value.
    pub fn toggle(&self) -> WidthMode {
        let previous = self.east_asian.fetch_xor(true, Ordering::AcqRel);
        let mode = WidthMode::from_east_asian(!previous);
        crate::debug!(mode = mode.as_str(), "width mode toggled");
        mode
    }
}
