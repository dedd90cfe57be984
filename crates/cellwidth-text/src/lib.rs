#![forbid(unsafe_code)]

//! Grapheme segmentation and terminal column width.
//!
//! - [`clusters`] splits text into extended grapheme clusters
//! - [`WidthCalculator`] measures a [`Cluster`] (or a lone codepoint) in
//!   terminal columns under a [`WidthMode`](cellwidth_core::WidthMode)
//! - [`AmbiguousTable`] decides which codepoints follow the mode
//! - [`WidthCache`] memoises cluster widths across frames
//! - [`StringMetrics`] reports the numbers behind a width disagreement
//!
//! # Example
//! ```
//! use cellwidth_core::WidthMode;
//! use cellwidth_text::{ColumnWidth, WidthCalculator, clusters};
//!
//! let calc = WidthCalculator::default();
//! let gear = clusters("\u{2699}\u{FE0F}").next().unwrap();
//! assert_eq!(gear.base(), '\u{2699}');
//! assert_eq!(calc.cluster_width(&gear, WidthMode::Narrow), ColumnWidth::Wide);
//!
//! // Counting codepoints instead gives the selector cells of its own.
//! assert_eq!(calc.naive_text_width("\u{2699}\u{FE0F}", WidthMode::Narrow), 3);
//! ```

pub mod ambiguous;
pub mod cluster;
pub mod metrics;
pub mod segment;
pub mod tables;
pub mod width;
pub mod width_cache;

pub use ambiguous::{AmbiguousTable, AmbiguousTableError, CodepointRange};
pub use cluster::Cluster;
pub use metrics::{StringMetrics, strip_emoji_selector};
pub use segment::{
    Clusters, SegmentError, cluster_count, clusters, clusters_from_utf8, decode_utf8,
};
pub use width::{ColumnWidth, WidthCalculator, cluster_width, display_width};
pub use width_cache::{CacheStats, WidthCache};
