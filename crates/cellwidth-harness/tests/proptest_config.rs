//! Property tests for argument handling and scene rendering.

use cellwidth_core::WidthMode;
use cellwidth_harness::{HarnessConfig, View, buffer_to_text, scene};
use cellwidth_render::{PlacementStrategy, TextPlacer};
use proptest::prelude::*;

fn arg_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("table".to_string()),
        Just("titles".to_string()),
        Just("--east-asian".to_string()),
        Just("--narrow".to_string()),
        Just("--ansi".to_string()),
        Just("--json".to_string()),
        Just("--width".to_string()),
        (1u16..=400).prop_map(|w| w.to_string()),
        "[-a-z0-9=]{0,12}",
    ]
}

proptest! {
    #[test]
    fn arbitrary_arguments_never_panic(args in prop::collection::vec(arg_strategy(), 0..8)) {
        let _ = HarnessConfig::default().apply_args(&args);
    }

    #[test]
    fn explicit_width_is_kept(width in 1u16..=u16::MAX) {
        let config = HarnessConfig::default()
            .apply_args(["--width".to_string(), width.to_string()])
            .unwrap();
        prop_assert_eq!(config.width, Some(width));
    }

    #[test]
    fn last_mode_flag_wins(flags in prop::collection::vec(any::<bool>(), 1..6)) {
        let args: Vec<&str> = flags
            .iter()
            .map(|wide| if *wide { "--east-asian" } else { "--narrow" })
            .collect();
        let config = HarnessConfig::default().apply_args(&args).unwrap();
        let expected = WidthMode::from_east_asian(*flags.last().unwrap());
        prop_assert_eq!(config.mode, expected);
    }

    #[test]
    fn every_width_renders_full_rows(width in 1u16..=160, wide in any::<bool>()) {
        let placer = TextPlacer::new(
            PlacementStrategy::Clusters,
            WidthMode::from_east_asian(wide),
        );
        for view in View::ALL {
            let buf = scene::render(view, width, &placer);
            let text = buffer_to_text(&buf);
            prop_assert_eq!(text.lines().count(), view.height() as usize);
        }
    }
}
