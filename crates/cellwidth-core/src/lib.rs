#![forbid(unsafe_code)]

//! Core: rendering mode, environment configuration, geometry, and logging.
//!
//! # Role in cellwidth
//! `cellwidth-core` owns the small amount of shared state the width engine
//! needs: the East-Asian-Width [`WidthMode`](width_mode::WidthMode), the
//! process-wide [`WidthModeSwitch`](width_mode::WidthModeSwitch) an input
//! handler flips, and the environment parsing used to pick the initial mode.
//!
//! Everything downstream (`cellwidth-text`, `cellwidth-render`) receives the
//! mode as an explicit parameter; nothing reads the switch mid-pass.

pub mod env;
pub mod geometry;
pub mod logging;
pub mod width_mode;

pub use width_mode::{WidthMode, WidthModeSwitch};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, trace_span, warn};
