//! End-to-end placement scenarios for the emoji presentation selector,
//! ambiguous-width letters and the mode toggle.

use cellwidth_core::{WidthMode, WidthModeSwitch};
use cellwidth_render::{
    Buffer, CellStyle, CellWriter, PlaceError, PlacementStrategy, RecordingWriter, TextPlacer,
};
use cellwidth_text::ColumnWidth;

const GEAR: &str = "\u{2699}\u{FE0F}";

fn place_with(strategy: PlacementStrategy, mode: WidthMode, text: &str, start: u16) -> (u16, RecordingWriter) {
    let mut out = RecordingWriter::new();
    let end = TextPlacer::new(strategy, mode)
        .place(&mut out, text, start, 0, CellStyle::PLAIN)
        .unwrap();
    (end, out)
}

// =============================================================================
// Emoji presentation selector
// =============================================================================

#[test]
fn gear_cluster_aware() {
    let (end, out) = place_with(PlacementStrategy::Clusters, WidthMode::Narrow, GEAR, 0);
    assert_eq!(end, 2);
    assert_eq!(out.len(), 1);
    let r = &out.records()[0];
    assert_eq!((r.column, r.primary), (0, '\u{2699}'));
    assert_eq!(r.combining.as_slice(), &['\u{FE0F}']);
}

#[test]
fn gear_naive() {
    let (end, out) = place_with(PlacementStrategy::Naive, WidthMode::Narrow, GEAR, 0);
    assert_eq!(end, 3);
    assert_eq!(out.len(), 2);
    assert_ne!(out.total_width(), 2);
}

#[test]
fn every_selector_icon_diverges() {
    for icon in [
        "\u{2699}\u{FE0F}",
        "\u{1F5BC}\u{FE0F}",
        "\u{1F5D1}\u{FE0F}",
        "\u{2B05}\u{FE0F}",
        "\u{27A1}\u{FE0F}",
        "\u{2139}\u{FE0F}",
    ] {
        let (fixed, fixed_out) = place_with(PlacementStrategy::Clusters, WidthMode::Narrow, icon, 0);
        let (broken, broken_out) = place_with(PlacementStrategy::Naive, WidthMode::Narrow, icon, 0);
        assert_eq!(fixed, 2, "{icon:?}");
        assert_eq!(fixed_out.len(), 1);
        assert_eq!(broken_out.len(), 2);
        assert_ne!(fixed, broken, "{icon:?}");
    }
}

#[test]
fn workaround_drops_selector() {
    let (end, out) = place_with(PlacementStrategy::StripSelectors, WidthMode::Narrow, GEAR, 0);
    assert_eq!(end, 1);
    assert_eq!(out.len(), 1);
    assert!(out.records()[0].combining.is_empty());
}

// =============================================================================
// Ambiguous width and mode
// =============================================================================

#[test]
fn cyrillic_de_follows_mode() {
    assert_eq!(place_with(PlacementStrategy::Clusters, WidthMode::Narrow, "Д", 0).0, 1);
    assert_eq!(place_with(PlacementStrategy::Clusters, WidthMode::Wide, "Д", 0).0, 2);
}

#[test]
fn toggle_moves_alpha_but_not_gear() {
    let switch = WidthModeSwitch::new(WidthMode::Narrow);
    let alpha_before = place_with(PlacementStrategy::Clusters, switch.snapshot(), "α", 0).0;
    let gear_before = place_with(PlacementStrategy::Clusters, switch.snapshot(), GEAR, 0).0;
    switch.toggle();
    let alpha_after = place_with(PlacementStrategy::Clusters, switch.snapshot(), "α", 0).0;
    let gear_after = place_with(PlacementStrategy::Clusters, switch.snapshot(), GEAR, 0).0;
    assert_eq!((alpha_before, alpha_after), (1, 2));
    assert_eq!((gear_before, gear_after), (2, 2));
}

// =============================================================================
// Degenerate input
// =============================================================================

#[test]
fn empty_input_at_any_start() {
    for strategy in PlacementStrategy::ALL {
        for start in [0, 5, u16::MAX] {
            let (end, out) = place_with(strategy, WidthMode::Narrow, "", start);
            assert_eq!(end, start);
            assert!(out.is_empty());
        }
    }
}

#[test]
fn ascii_strategies_agree() {
    let text = "Settings | Images | Trash";
    let (a, a_out) = place_with(PlacementStrategy::Clusters, WidthMode::Wide, text, 3);
    let (b, b_out) = place_with(PlacementStrategy::Naive, WidthMode::Wide, text, 3);
    assert_eq!(a, b);
    assert_eq!(a_out.records(), b_out.records());
}

#[test]
fn lone_combining_mark_is_zero_width_placement() {
    let (end, out) = place_with(PlacementStrategy::Clusters, WidthMode::Narrow, "\u{0301}x", 4);
    assert_eq!(end, 5);
    assert_eq!(out.records()[0].width, ColumnWidth::Zero);
    assert_eq!(out.records()[0].column, 4);
    assert_eq!(out.records()[1].column, 4);
}

#[test]
fn invalid_bytes_issue_no_placements() {
    let placer = TextPlacer::new(PlacementStrategy::Clusters, WidthMode::Narrow);
    let mut out = RecordingWriter::new();
    assert!(
        placer
            .place_utf8(&mut out, b"\xE2\x9A\x99\xEF\xB8", 0, 0, CellStyle::PLAIN)
            .is_err_and(|err| matches!(err, PlaceError::InvalidEncoding(_)))
    );
    assert!(out.is_empty());
}

// =============================================================================
// Into a buffer
// =============================================================================

fn buffer_row(buf: &Buffer, y: u16) -> String {
    let mut out = String::new();
    for cell in buf.row_cells(y) {
        if cell.is_continuation() {
            continue;
        }
        if cell.is_empty() {
            out.push(' ');
        } else {
            cell.content.push_text(&mut out);
        }
    }
    out
}

#[test]
fn icon_and_label_chain_in_buffer() {
    let mut buf = Buffer::new(12, 1);
    let placer = TextPlacer::new(PlacementStrategy::Clusters, WidthMode::Narrow);
    let after = placer.place(&mut buf, GEAR, 0, 0, CellStyle::PLAIN).unwrap();
    placer.place(&mut buf, "Cfg", after, 0, CellStyle::PLAIN).unwrap();
    assert_eq!(buffer_row(&buf, 0), "\u{2699}\u{FE0F}Cfg       ");
    assert!(buf.get(1, 0).unwrap().is_continuation());
}

#[test]
fn naive_gear_in_buffer_spends_three_columns() {
    let mut buf = Buffer::new(6, 1);
    let placer = TextPlacer::new(PlacementStrategy::Naive, WidthMode::Narrow);
    let end = placer.place(&mut buf, GEAR, 0, 0, CellStyle::PLAIN);
    assert_eq!(end, Ok(3));
    assert_eq!(buf.get(1, 0).unwrap().content.primary(), Some('\u{FE0F}'));
    assert!(buf.get(2, 0).unwrap().is_continuation());
}

#[test]
fn writer_trait_object_works() {
    let placer = TextPlacer::new(PlacementStrategy::Clusters, WidthMode::Narrow);
    let mut out = RecordingWriter::new();
    let writer: &mut dyn CellWriter = &mut out;
    assert_eq!(placer.place(writer, "ab", 0, 0, CellStyle::PLAIN), Ok(2));
    assert_eq!(out.len(), 2);
}

// =============================================================================
// End of the column range
// =============================================================================

#[test]
fn text_past_last_column_is_an_error() {
    let placer = TextPlacer::new(PlacementStrategy::Clusters, WidthMode::Narrow);
    let mut out = RecordingWriter::new();
    let result = placer.place(&mut out, "x\u{2699}\u{FE0F}y", u16::MAX - 2, 0, CellStyle::PLAIN);
    assert_eq!(
        result,
        Err(PlaceError::ColumnOverflow {
            end: u16::MAX - 1,
            unplaced: 1
        })
    );
    assert_eq!(out.len(), 1);
}

#[test]
fn clipped_title_reports_what_was_cut() {
    let placer = TextPlacer::new(PlacementStrategy::Naive, WidthMode::Narrow);
    let mut out = RecordingWriter::new();
    let placed = placer.place_clipped(&mut out, "\u{2699}\u{FE0F} Settings", 0, 0, CellStyle::PLAIN, 6);
    // Gear, FE0F (2 columns), space, then "Se" before the edge.
    assert_eq!(placed.end, 6);
    assert_eq!(placed.unplaced, Some(9));
}
