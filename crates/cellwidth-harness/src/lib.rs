#![forbid(unsafe_code)]

//! Headless diagnostic scenes for FE0F width bugs.
//!
//! The harness draws a fixed set of icon strings through the naive,
//! cluster-aware and FE0F-stripping placers into a [`Buffer`], then exports
//! the buffer as plain text or ANSI so the result can be eyeballed in a real
//! terminal or compared in tests.
//!
//! # Quick Start
//!
//! ```
//! use cellwidth_core::WidthMode;
//! use cellwidth_harness::{View, buffer_to_text, scene};
//! use cellwidth_render::{PlacementStrategy, TextPlacer};
//!
//! let placer = TextPlacer::new(PlacementStrategy::Clusters, WidthMode::Narrow);
//! let buf = scene::render(View::Titles, 80, &placer);
//! assert!(buffer_to_text(&buf).contains("Look at title ^"));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod samples;
pub mod scene;

pub use cellwidth_render::Buffer;
pub use config::{HarnessConfig, OutputFormat, View};
pub use error::HarnessError;
pub use export::{buffer_to_ansi, buffer_to_text, diff_text, metrics_jsonl};
