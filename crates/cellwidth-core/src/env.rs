#![forbid(unsafe_code)]

//! Environment variable parsing.
//!
//! All lookups go through a caller-supplied `Fn(&str) -> Option<String>` so
//! tests can feed a map instead of mutating the process environment.

/// Initial East-Asian-Width mode (`1/0/true/false/yes/no/on/off`).
pub const ENV_EAST_ASIAN_WIDTH: &str = "CELLWIDTH_EAST_ASIAN_WIDTH";
/// Extra code point ranges treated as ambiguous width (`0391-03A9,2605`).
pub const ENV_AMBIGUOUS_EXTRA: &str = "CELLWIDTH_AMBIGUOUS_EXTRA";
/// Code point ranges removed from the ambiguous width table.
pub const ENV_AMBIGUOUS_EXCLUDE: &str = "CELLWIDTH_AMBIGUOUS_EXCLUDE";

/// Parse a boolean flag value.
///
/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively and
/// ignoring surrounding whitespace.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Look up `key` and parse it as a boolean flag.
///
/// Unset and unparseable values both yield `None`.
pub fn env_bool<F>(get_env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key).and_then(|value| parse_bool(&value))
}

/// Look up `key`, returning `None` for unset or blank values.
pub fn env_nonempty<F>(get_env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key).filter(|value| !value.trim().is_empty())
}

/// Process environment lookup, for production callers.
#[must_use]
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
