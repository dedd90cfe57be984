#![forbid(unsafe_code)]

//! Extended grapheme cluster segmentation.
//!
//! Segmentation follows Unicode UAX #29 extended grapheme clusters, so an
//! emoji base and its FE0F selector, a ZWJ sequence, a flag pair, or a base
//! with combining marks each come out as one [`Cluster`].
//!
//! # Example
//! ```
//! use cellwidth_text::clusters;
//!
//! let parts: Vec<&str> = clusters("a\u{2699}\u{FE0F}b").map(|c| c.as_str()).collect();
//! assert_eq!(parts, ["a", "\u{2699}\u{FE0F}", "b"]);
//! ```

use std::iter::FusedIterator;

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

use crate::cluster::Cluster;

/// Errors from segmenting raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    /// The input is not valid UTF-8.
    InvalidEncoding {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
        /// Length of the invalid sequence, or `None` if the input ends in the
        /// middle of a sequence.
        error_len: Option<usize>,
    },
}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEncoding {
                valid_up_to,
                error_len: Some(len),
            } => write!(f, "invalid UTF-8: {len} bad byte(s) at offset {valid_up_to}"),
            Self::InvalidEncoding {
                valid_up_to,
                error_len: None,
            } => write!(f, "invalid UTF-8: truncated sequence at offset {valid_up_to}"),
        }
    }
}

impl std::error::Error for SegmentError {}

impl From<std::str::Utf8Error> for SegmentError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}

/// Lazy iterator over the clusters of a string.
///
/// Cloning the iterator restarts nothing; it forks the walk at the current
/// position. Call [`clusters`] again to start from the beginning.
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    inner: GraphemeIndices<'a>,
}

impl<'a> Clusters<'a> {
    /// The part of the input not yet yielded.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        self.inner.as_str()
    }
}

impl<'a> Iterator for Clusters<'a> {
    type Item = Cluster<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(offset, text)| Cluster::new(text, offset))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Clusters<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(offset, text)| Cluster::new(text, offset))
    }
}

impl FusedIterator for Clusters<'_> {}

/// Segment `text` into extended grapheme clusters.
///
/// Concatenating the yielded clusters reproduces `text` exactly. An empty
/// input yields nothing.
#[inline]
#[must_use]
pub fn clusters(text: &str) -> Clusters<'_> {
    Clusters {
        inner: text.grapheme_indices(true),
    }
}

/// Validate raw bytes as UTF-8.
///
/// Malformed input is rejected as a whole; there is no replacement-character
/// recovery.
pub fn decode_utf8(bytes: &[u8]) -> Result<&str, SegmentError> {
    std::str::from_utf8(bytes).map_err(|err| {
        let err = SegmentError::from(err);
        if let SegmentError::InvalidEncoding {
            valid_up_to,
            error_len,
        } = err
        {
            tracing::warn!(
                valid_up_to,
                error_len = ?error_len,
                total = bytes.len(),
                "rejecting malformed UTF-8 input"
            );
        }
        err
    })
}

/// Segment raw bytes, failing on invalid UTF-8.
pub fn clusters_from_utf8(bytes: &[u8]) -> Result<Clusters<'_>, SegmentError> {
    decode_utf8(bytes).map(clusters)
}

/// Number of clusters in `text`.
#[must_use]
pub fn cluster_count(text: &str) -> usize {
    if text.is_ascii() {
        // Every ASCII byte is its own cluster except CR LF.
        return text.len() - text.matches("\r\n").count();
    }
    clusters(text).count()
}
