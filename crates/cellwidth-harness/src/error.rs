#![forbid(unsafe_code)]

//! Harness errors.

use std::fmt;
use std::io;

use cellwidth_text::AmbiguousTableError;

/// Failure surfaced by the harness binary.
#[derive(Debug)]
pub enum HarnessError {
    /// Bad command line argument or environment value.
    Config(String),
    /// Writing the rendered scene failed.
    Io(io::Error),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<AmbiguousTableError> for HarnessError {
    fn from(err: AmbiguousTableError) -> Self {
        Self::Config(err.to_string())
    }
}
