#![forbid(unsafe_code)]

//! Placement tracing integration tests.
//!
//! Spans enabled:
//!   cargo test -p cellwidth-render --features tracing --test tracing_spans
//!
//! Without the feature only the zero-overhead check runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cellwidth_core::WidthMode;
use cellwidth_render::{CellStyle, PlacementStrategy, RecordingWriter, TextPlacer};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records every new span.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for SpanCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured_spans<F: FnOnce()>(f: F) -> Vec<CapturedSpan> {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: Arc::clone(&spans),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = spans.lock().unwrap().clone();
    captured
}

fn place_gear(strategy: PlacementStrategy) {
    let mut out = RecordingWriter::new();
    TextPlacer::new(strategy, WidthMode::Wide)
        .place(&mut out, "\u{2699}\u{FE0F}", 3, 1, CellStyle::PLAIN)
        .expect("gear fits");
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn place_opens_span_with_strategy_and_mode() {
    let spans = with_captured_spans(|| place_gear(PlacementStrategy::Naive));
    let place = spans
        .iter()
        .find(|s| s.name == "place")
        .expect("place span recorded");
    assert_eq!(place.fields.get("strategy").map(String::as_str), Some("naive"));
    assert_eq!(place.fields.get("mode").map(String::as_str), Some("wide"));
    assert_eq!(place.fields.get("start").map(String::as_str), Some("3"));
}

#[test]
#[cfg(feature = "tracing")]
fn one_span_per_place_call() {
    let spans = with_captured_spans(|| {
        for strategy in PlacementStrategy::ALL {
            place_gear(strategy);
        }
    });
    assert_eq!(spans.iter().filter(|s| s.name == "place").count(), 3);
}

#[test]
#[cfg(not(feature = "tracing"))]
fn zero_overhead_without_feature() {
    let spans = with_captured_spans(|| place_gear(PlacementStrategy::Clusters));
    assert!(spans.is_empty());
}
