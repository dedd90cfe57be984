#![forbid(unsafe_code)]

//! Diagnostic scenes.
//!
//! Each scene draws the same sample strings through more than one
//! [`PlacementStrategy`] so misalignment is visible side by side. Scenes are
//! rendered once into a [`Buffer`]; there is no event loop.
//!
//! The [`View::Table`] scene compares all three strategies:
//!
//! ```text
//! BROKEN: FE0F as its own cell (naive)
//! ┌──────────────┐
//! │ ⚙️ ...
//! ```
//!
//! The [`View::Titles`] scene shows the title-bar variant of the bug, where
//! a per-codepoint title eats the border to its right.

use cellwidth_core::geometry::Rect;
use cellwidth_render::{
    BorderChars, Buffer, CellStyle, Draw, PackedRgba, PlacementStrategy, TextPlacer,
};
use cellwidth_text::{StringMetrics, WidthCache, clusters};

use crate::config::View;
use crate::samples::{AMBIGUOUS, ICONS, Sample, TITLES};

/// Rows the table scene needs, footer included.
pub const TABLE_HEIGHT: u16 = 75;
/// Rows the titles scene needs.
pub const TITLES_HEIGHT: u16 = 30;

const BOX_WIDTH: u16 = 16;
const COL2_X: u16 = 50;
const TEXT_BOX_WIDTH: u16 = 20;
const TITLE_BOX_WIDTH: u16 = 22;
const VIEW_WIDTH: u16 = 19;
const PANEL_WIDTH: u16 = 38;

const METRICS_HEADER: &str = "Icon | Bytes | Cps | Naive | Cluster | Drift | FE0F";

const RED: CellStyle = CellStyle::fg(PackedRgba::RED);
const GREEN: CellStyle = CellStyle::fg(PackedRgba::GREEN);
const YELLOW: CellStyle = CellStyle::fg(PackedRgba::YELLOW);
const PLAIN: CellStyle = CellStyle::PLAIN;

impl View {
    /// Rows needed to draw this view without clipping.
    #[must_use]
    pub const fn height(self) -> u16 {
        match self {
            Self::Table => TABLE_HEIGHT,
            Self::Titles => TITLES_HEIGHT,
        }
    }
}

/// The three placers a scene compares, sharing one mode and calculator.
#[derive(Debug, Clone)]
pub struct Placers {
    pub naive: TextPlacer,
    pub clusters: TextPlacer,
    pub stripped: TextPlacer,
}

impl Placers {
    /// Derive all strategies from `base`, keeping its mode and calculator.
    #[must_use]
    pub fn from_base(base: &TextPlacer) -> Self {
        Self {
            naive: base.with_strategy(PlacementStrategy::Naive),
            clusters: base.with_strategy(PlacementStrategy::Clusters),
            stripped: base.with_strategy(PlacementStrategy::StripSelectors),
        }
    }
}

/// Render `view` into a fresh buffer `width` columns wide.
///
/// # Panics
///
/// Panics if `width` is zero.
#[must_use]
pub fn render(view: View, width: u16, base: &TextPlacer) -> Buffer {
    let mut buf = Buffer::new(width, view.height());
    draw_view(&mut buf, view, base);
    buf
}

/// Draw `view` into an existing buffer. Anything outside it is clipped.
pub fn draw_view(buf: &mut Buffer, view: View, base: &TextPlacer) {
    tracing::debug!(
        view = view.as_str(),
        width = buf.width(),
        height = buf.height(),
        mode = base.mode().as_str(),
        "drawing scene"
    );
    let placers = Placers::from_base(base);
    match view {
        View::Table => draw_table(buf, &placers),
        View::Titles => draw_titles(buf, &placers),
    }
}

/// Metrics for every icon sample under the placers' mode.
#[must_use]
pub fn icon_metrics(placer: &TextPlacer) -> Vec<(Sample, StringMetrics)> {
    ICONS
        .iter()
        .map(|sample| {
            let metrics = StringMetrics::measure(sample.text, placer.calculator(), placer.mode());
            (*sample, metrics)
        })
        .collect()
}

/// One row of the metrics table, drawn from column 4 after the icon.
#[must_use]
pub fn metrics_row(metrics: &StringMetrics) -> String {
    format!(
        " | {:>5} | {:>3} | {:>5} | {:>7} | {:>5} | {}",
        metrics.bytes,
        metrics.codepoints,
        metrics.naive_width,
        metrics.cluster_width,
        metrics.drift(),
        metrics.has_emoji_selector
    )
}

/// Place `s` at `(x, y)`, clipped to the buffer's right edge.
fn text(buf: &mut Buffer, placer: &TextPlacer, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
    let right = buf.width();
    placer.place_clipped(buf, s, x, y, style, right).end
}

/// Cluster width of `s`, memoised across the rows of a scene.
fn cached_width(cache: &mut WidthCache, placer: &TextPlacer, s: &str) -> usize {
    clusters(s)
        .map(|cluster| {
            cache
                .get_or_compute(&cluster, placer.mode(), placer.calculator())
                .as_usize()
        })
        .sum()
}

fn draw_table(buf: &mut Buffer, p: &Placers) {
    let mode = p.clusters.mode();
    let fixed = &p.clusters;
    let mut y = 0;

    let header = format!(
        "Unicode Width Test (EastAsianWidth: {}) - run with --east-asian to toggle",
        mode.is_east_asian()
    );
    text(buf, fixed, 0, y, &header, PLAIN.bold());
    y += 2;

    text(buf, fixed, 0, y, METRICS_HEADER, PLAIN);
    y += 1;
    text(buf, fixed, 0, y, &"-".repeat(METRICS_HEADER.len()), PLAIN);
    y += 1;
    for (sample, metrics) in icon_metrics(fixed) {
        text(buf, fixed, 1, y, sample.text, PLAIN);
        text(buf, fixed, 4, y, &metrics_row(&metrics), PLAIN);
        y += 1;
    }
    y += 1;

    let box_height = ICONS.len() as u16 + 2;

    // Naive rows can spill a continuation into the next glyph, so this box
    // gets a row band of its own.
    text(buf, fixed, 0, y, "BROKEN: FE0F as its own cell (naive)", RED);
    y += 1;
    buf.draw_border(Rect::new(0, y, BOX_WIDTH, box_height), BorderChars::SQUARE, PLAIN);
    for (row, sample) in (y + 1..).zip(ICONS.iter()) {
        text(buf, &p.naive, 2, row, sample.text, PLAIN);
    }
    y += box_height + 1;

    text(buf, fixed, 0, y, "FIXED: FE0F kept in its cluster", GREEN);
    text(buf, fixed, COL2_X, y, "WORKAROUND: strip FE0F", PLAIN);
    y += 1;
    buf.draw_border(Rect::new(0, y, BOX_WIDTH, box_height), BorderChars::SQUARE, PLAIN);
    buf.draw_border(
        Rect::new(COL2_X, y, BOX_WIDTH, box_height),
        BorderChars::SQUARE,
        PLAIN,
    );
    for (row, sample) in (y + 1..).zip(ICONS.iter()) {
        text(buf, &p.clusters, 2, row, sample.text, PLAIN);
        text(buf, &p.stripped, COL2_X + 2, row, sample.text, PLAIN);
    }
    y += box_height + 1;

    let text_col2 = TEXT_BOX_WIDTH + 2;
    text(buf, fixed, 0, y, "Icon+Text (no space)", PLAIN);
    text(buf, fixed, text_col2, y, "Icon + Text (with space)", PLAIN);
    y += 1;
    buf.draw_border(
        Rect::new(0, y, TEXT_BOX_WIDTH, box_height),
        BorderChars::SQUARE,
        PLAIN,
    );
    buf.draw_border(
        Rect::new(text_col2, y, TEXT_BOX_WIDTH + 2, box_height),
        BorderChars::SQUARE,
        PLAIN,
    );
    for (row, sample) in (y + 1..).zip(ICONS.iter()) {
        let x = text(buf, fixed, 2, row, sample.text, PLAIN);
        text(buf, fixed, x, row, sample.name, PLAIN);

        let x = text(buf, fixed, text_col2 + 2, row, sample.text, PLAIN);
        let x = text(buf, fixed, x, row, " ", PLAIN);
        text(buf, fixed, x, row, sample.name, PLAIN);
    }
    y += box_height + 1;

    text(buf, fixed, 0, y, "Title BROKEN: per codepoint", RED);
    y += 1;
    buf.draw_titled_border(Rect::new(0, y, TITLE_BOX_WIDTH, 3), TITLES[0], &p.naive, PLAIN);
    y += 4;

    text(buf, fixed, 0, y, "Title FIXED: per cluster", GREEN);
    text(buf, fixed, TITLE_BOX_WIDTH + 2, y, "Multi-icon: per cluster", GREEN);
    y += 1;
    buf.draw_titled_border(Rect::new(0, y, TITLE_BOX_WIDTH, 3), TITLES[0], fixed, PLAIN);
    buf.draw_titled_border(
        Rect::new(TITLE_BOX_WIDTH + 2, y, TITLE_BOX_WIDTH + 8, 3),
        "\u{1F4E6} Pkg \u{2699}\u{FE0F} Cfg",
        fixed,
        PLAIN,
    );
    y += 4;

    let small_titles = [
        "\u{1F5BC}\u{FE0F} Images",
        "\u{1F5D1}\u{FE0F} Trash",
        "\u{2139}\u{FE0F} Info",
        "\u{1F4E6} Pkg",
    ];
    for (i, title) in (0u16..).zip(small_titles) {
        let x = (BOX_WIDTH + 1) * i;
        buf.draw_titled_border(Rect::new(x, y, BOX_WIDTH, 3), title, fixed, PLAIN);
    }
    y += 4;

    let label = format!(
        "EastAsianWidth: {} (ambiguous characters take {} column)",
        mode.is_east_asian(),
        mode.ambiguous_width()
    );
    text(buf, fixed, 0, y, &label, YELLOW);
    y += 1;
    text(buf, fixed, 0, y, "Char | W | Name", PLAIN);
    y += 1;
    let mut cache = WidthCache::new(AMBIGUOUS.len());
    for sample in AMBIGUOUS {
        let width = cached_width(&mut cache, fixed, sample.text);
        text(buf, fixed, 0, y, sample.text, PLAIN);
        text(buf, fixed, 4, y, &format!(" | {width} | {}", sample.name), PLAIN);
        y += 1;
    }

    let stats = cache.stats();
    tracing::trace!(hits = stats.hits, misses = stats.misses, "ambiguous widths");

    let (width, height) = (buf.width(), buf.height());
    let footer =
        format!("Screen: {width}x{height} | mode={mode} | --east-asian toggles ambiguous width");
    text(buf, fixed, 0, height - 1, &footer, PLAIN);
}

fn draw_titles(buf: &mut Buffer, p: &Placers) {
    let fixed = &p.clusters;
    let mut y = 0;

    text(
        buf,
        fixed,
        0,
        y,
        "FE0F title demo: per codepoint vs per cluster",
        PLAIN.bold(),
    );
    y += 1;

    for (label, style, placer) in [
        ("TITLE BUG (per codepoint):", RED, &p.naive),
        ("TITLE FIXED (per cluster):", GREEN, fixed),
    ] {
        text(buf, fixed, 0, y, label, style);
        y += 1;
        for (i, title) in (0u16..).zip(TITLES) {
            let rect = Rect::new(i * VIEW_WIDTH, y, VIEW_WIDTH, 4).intersection(&buf.bounds());
            if rect.is_empty() {
                continue;
            }
            buf.draw_titled_border(rect, title, placer, PLAIN);
            framed_lines(buf, fixed, rect, &["Look at title ^"]);
        }
        y += 5;
    }

    text(buf, fixed, 0, y, "CONTENT (cells per codepoint | per cluster):", PLAIN);
    y += 1;
    let mut lines = vec![
        "Each line has emoji with FE0F:".to_string(),
        String::new(),
    ];
    lines.extend(TITLES.iter().map(|title| format!("  {title}")));
    lines.extend([String::new(), "If broken: extra space or artifacts".to_string()]);
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    let panel_height = lines.len() as u16 + 2;

    for (i, (title, placer)) in (0u16..).zip([
        ("Content per codepoint", &p.naive),
        ("Content per cluster", fixed),
    ]) {
        let rect = Rect::new(i * (PANEL_WIDTH + 2), y, PANEL_WIDTH, panel_height);
        buf.draw_titled_border(rect, title, fixed, PLAIN);
        framed_lines(buf, placer, rect, &lines);
    }
    y += panel_height + 1;

    if y + 5 <= buf.height() {
        let rect = Rect::new(0, y, buf.width(), 5);
        buf.draw_titled_border(rect, "Info", fixed, PLAIN);
        framed_lines(
            buf,
            fixed,
            rect,
            &[
                "The FE0F bug causes:",
                "1. Titles and content: FE0F treated as a separate char with width, causing extra spaces",
                "2. Misaligned lines and rendering artifacts on the right edge",
            ],
        );
    }
}

/// Write `lines` inside the border of `rect`, one per row, clipped to it.
fn framed_lines(buf: &mut Buffer, placer: &TextPlacer, rect: Rect, lines: &[&str]) {
    let inner = rect.interior();
    if inner.is_empty() {
        return;
    }
    buf.push_scissor(inner);
    for (row, line) in (inner.top()..inner.bottom()).zip(lines) {
        placer.place_clipped(buf, line, inner.left(), row, PLAIN, inner.right());
    }
    buf.pop_scissor();
}
