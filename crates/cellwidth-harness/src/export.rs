#![forbid(unsafe_code)]

//! Buffer → text conversion and snapshot comparison helpers.

use cellwidth_core::WidthMode;
use cellwidth_render::{Buffer, Cell, CellStyle, StyleFlags};
use cellwidth_text::StringMetrics;
use serde_json::json;

use crate::samples::Sample;

/// Convert a `Buffer` to a plain text string.
///
/// Each row becomes one line. Empty cells become spaces. Continuation cells
/// are skipped so wide glyphs occupy their natural width in the output, and
/// each glyph is followed by its combining codepoints.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let capacity = (buf.width() as usize + 1) * buf.height() as usize;
    let mut out = String::with_capacity(capacity);

    for y in 0..buf.height() {
        if y > 0 {
            out.push('\n');
        }
        for cell in buf.row_cells(y) {
            push_cell(&mut out, cell);
        }
    }
    out
}

/// Convert a `Buffer` to text with inline ANSI escape codes.
///
/// Emits SGR sequences when the foreground or flags change between adjacent
/// cells. Resets styling at the end of each row.
pub fn buffer_to_ansi(buf: &Buffer) -> String {
    let capacity = (buf.width() as usize + 32) * buf.height() as usize;
    let mut out = String::with_capacity(capacity);

    for y in 0..buf.height() {
        if y > 0 {
            out.push('\n');
        }

        let mut prev = CellStyle::PLAIN;
        let mut style_active = false;

        for cell in buf.row_cells(y) {
            if cell.is_continuation() {
                continue;
            }

            if cell.style != prev {
                if cell.style.is_plain() {
                    if style_active {
                        out.push_str("\x1b[0m");
                        style_active = false;
                    }
                } else {
                    if style_active {
                        out.push_str("\x1b[0m");
                    }
                    out.push_str("\x1b[");
                    out.push_str(&sgr_params(cell.style).join(";"));
                    out.push('m');
                    style_active = true;
                }
                prev = cell.style;
            }

            push_cell(&mut out, cell);
        }

        if style_active {
            out.push_str("\x1b[0m");
        }
    }
    out
}

fn push_cell(out: &mut String, cell: &Cell) {
    if cell.is_continuation() {
        return;
    }
    if cell.is_empty() {
        out.push(' ');
    } else {
        cell.content.push_text(out);
    }
}

fn sgr_params(style: CellStyle) -> Vec<String> {
    let mut params = Vec::new();
    for (flag, code) in [
        (StyleFlags::BOLD, "1"),
        (StyleFlags::DIM, "2"),
        (StyleFlags::ITALIC, "3"),
        (StyleFlags::UNDERLINE, "4"),
        (StyleFlags::REVERSE, "7"),
    ] {
        if style.flags.contains(flag) {
            params.push(code.to_string());
        }
    }
    let fg = style.fg;
    if !fg.is_default() {
        params.push(format!("38;2;{};{};{}", fg.r(), fg.g(), fg.b()));
    }
    params
}

/// One JSON object per sample, newline-terminated.
///
/// Fields: `name`, `text`, `mode`, `bytes`, `codepoints`, `clusters`,
/// `naive_width`, `cluster_width`, `drift`, `fe0f`.
pub fn metrics_jsonl(rows: &[(Sample, StringMetrics)], mode: WidthMode) -> String {
    let mut out = String::new();
    for (sample, metrics) in rows {
        let line = json!({
            "name": sample.name,
            "text": sample.text,
            "mode": mode.as_str(),
            "bytes": metrics.bytes,
            "codepoints": metrics.codepoints,
            "clusters": metrics.clusters,
            "naive_width": metrics.naive_width,
            "cluster_width": metrics.cluster_width,
            "drift": metrics.drift(),
            "fe0f": metrics.has_emoji_selector,
        });
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Comparison mode for snapshot checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact string comparison.
    Exact,
    /// Trim trailing whitespace on each line before comparing.
    TrimTrailing,
}

/// Normalize text according to the requested match mode.
pub fn normalize(text: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => text.to_string(),
        MatchMode::TrimTrailing => text
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Line-by-line diff of two texts.
///
/// Lines only in `expected` are prefixed with `-`, lines only in `actual`
/// with `+`, shared lines with a space. Returns an empty string when the
/// inputs are identical.
pub fn diff_text(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let max_lines = expected_lines.len().max(actual_lines.len());
    let mut out = String::new();
    let mut has_diff = false;

    for i in 0..max_lines {
        match (expected_lines.get(i), actual_lines.get(i)) {
            (Some(e), Some(a)) if e == a => {
                out.push_str(&format!(" {e}\n"));
            }
            (exp, act) => {
                has_diff = true;
                if let Some(e) = exp {
                    out.push_str(&format!("-{e}\n"));
                }
                if let Some(a) = act {
                    out.push_str(&format!("+{a}\n"));
                }
            }
        }
    }

    if has_diff { out } else { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellwidth_render::{PackedRgba, PlacementStrategy, TextPlacer};

    fn placed(text: &str, strategy: PlacementStrategy, style: CellStyle) -> Buffer {
        let mut buf = Buffer::new(8, 1);
        TextPlacer::new(strategy, WidthMode::Narrow)
            .place(&mut buf, text, 0, 0, style)
            .unwrap();
        buf
    }

    #[test]
    fn text_keeps_clusters_whole() {
        let buf = placed("\u{2699}\u{FE0F}ab", PlacementStrategy::Clusters, CellStyle::PLAIN);
        assert_eq!(buffer_to_text(&buf), "\u{2699}\u{FE0F}ab    ");
    }

    #[test]
    fn naive_placement_shows_the_extra_cell() {
        let buf = placed("\u{2699}\u{FE0F}ab", PlacementStrategy::Naive, CellStyle::PLAIN);
        // Gear, a wide FE0F glyph, then "ab": one column more than the cluster version.
        assert_eq!(buffer_to_text(&buf), "\u{2699}\u{FE0F}ab   ");
        assert!(buf.get(2, 0).is_some_and(Cell::is_continuation));
    }

    #[test]
    fn rows_are_newline_separated() {
        let mut buf = Buffer::new(2, 2);
        buf.set(0, 1, Cell::from_char('x', CellStyle::PLAIN));
        assert_eq!(buffer_to_text(&buf), "  \nx ");
    }

    #[test]
    fn plain_buffer_has_no_escapes() {
        let buf = placed("abc", PlacementStrategy::Clusters, CellStyle::PLAIN);
        assert_eq!(buffer_to_ansi(&buf), buffer_to_text(&buf));
    }

    #[test]
    fn styled_run_is_wrapped_and_reset() {
        let red_bold = CellStyle::fg(PackedRgba::RED).bold();
        let buf = placed("ab", PlacementStrategy::Clusters, red_bold);
        let ansi = buffer_to_ansi(&buf);
        assert!(ansi.starts_with("\x1b[1;38;2;205;49;49mab"));
        // Back to plain for the blank tail, nothing left open at row end.
        assert!(ansi.contains("ab\x1b[0m      "));
        assert!(!ansi.ends_with("\x1b[0m"));
    }

    #[test]
    fn trim_trailing_ignores_padding() {
        assert_eq!(normalize("ab  \ncd ", MatchMode::TrimTrailing), "ab\ncd");
        assert_eq!(normalize("ab  ", MatchMode::Exact), "ab  ");
    }

    #[test]
    fn diff_marks_changed_lines() {
        assert!(diff_text("a\nb", "a\nb").is_empty());
        let diff = diff_text("a\nb", "a\nc");
        assert!(diff.contains("-b\n+c"));
        assert!(diff.starts_with(" a\n"));
    }

    #[test]
    fn metrics_lines_parse_back() {
        let placer = TextPlacer::new(PlacementStrategy::Clusters, WidthMode::Narrow);
        let rows = crate::scene::icon_metrics(&placer);
        let jsonl = metrics_jsonl(&rows, WidthMode::Narrow);
        assert_eq!(jsonl.lines().count(), rows.len());

        let gear: serde_json::Value = serde_json::from_str(jsonl.lines().next().unwrap()).unwrap();
        assert_eq!(gear["name"], "Gear");
        assert_eq!(gear["mode"], "narrow");
        assert_eq!(gear["naive_width"], 3);
        assert_eq!(gear["cluster_width"], 2);
        assert_eq!(gear["fe0f"], true);
    }
}
