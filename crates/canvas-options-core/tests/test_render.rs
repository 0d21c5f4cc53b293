#[allow(dead_code)]
mod common;

use canvas_options_core::error::CanvasOptionsError;
use canvas_options_core::handlers::PanelEvent;
use canvas_options_core::i18n::LabelKey;
use canvas_options_core::render::{describe, Control, ControlId, SubPanel};
use canvas_options_core::selector::select_infill_scaling;
use canvas_options_core::state::BoundingBoxScale;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn test_control_order() {
    let description = describe(&select_infill_scaling(&common::patchmatch_auto_state()));
    let order: Vec<String> = description
        .controls
        .iter()
        .map(|c| match c {
            Control::Select(s) => format!("{:?}", s.id),
            Control::Slider(s) => format!("{:?}", s.id),
            Control::SubPanel(p) => format!("{p:?}"),
        })
        .collect();
    assert_eq!(
        order,
        vec![
            "ScaleMethod",
            "ScaledWidth",
            "ScaledHeight",
            "InpaintReplace",
            "InfillMethod",
            "TileSize"
        ]
    );
    assert!(description
        .controls
        .contains(&Control::SubPanel(SubPanel::InpaintReplace)));
}

#[test]
fn test_scaled_slider_bounds() {
    let description = describe(&select_infill_scaling(&common::patchmatch_auto_state()));
    for id in [ControlId::ScaledWidth, ControlId::ScaledHeight] {
        let slider = description.slider(id).unwrap();
        assert_eq!((slider.min, slider.max, slider.step), (64.0, 1024.0, 64.0));
        assert_eq!(slider.input_max, 4096.0);
        assert!(slider.input_read_only);
        assert!(slider.with_reset && slider.with_input && slider.with_slider_marks);
    }
}

#[test]
fn test_tile_slider_bounds() {
    let description = describe(&select_infill_scaling(&common::patchmatch_auto_state()));
    let tile = description.slider(ControlId::TileSize).unwrap();
    assert_eq!((tile.min, tile.max), (16.0, 64.0));
    assert_eq!(tile.input_max, 256.0);
    assert!(!tile.input_read_only);
    assert_eq!(tile.slider_mark_right_offset, Some(-4.0));
}

#[test]
fn test_select_options() {
    let mut state = common::patchmatch_auto_state();
    state.system.infill_methods = vec!["patchmatch".into(), "tile".into(), "lama".into()];
    let description = describe(&select_infill_scaling(&state));

    let scale = description.select(ControlId::ScaleMethod).unwrap();
    assert_eq!(scale.label, LabelKey::ScaleBeforeProcessing);
    assert_eq!(scale.value, "auto");
    let values: Vec<&str> = scale.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["none", "auto", "manual"]);
    assert_eq!(scale.options[2].label, "Manual");

    let infill = description.select(ControlId::InfillMethod).unwrap();
    assert_eq!(infill.value, "patchmatch");
    assert_eq!(infill.options.len(), 3);
}

// ---------------------------------------------------------------------------
// Enablement
// ---------------------------------------------------------------------------

#[test]
fn test_scaled_sliders_follow_is_manual() {
    for scale in BoundingBoxScale::ALL {
        let state = common::state_with(32, "tile", (512, 512), *scale);
        let description = describe(&select_infill_scaling(&state));
        let disabled = *scale != BoundingBoxScale::Manual;
        for id in [ControlId::ScaledWidth, ControlId::ScaledHeight] {
            let s = description.slider(id).unwrap();
            assert_eq!(s.slider_disabled, disabled);
            assert_eq!(s.input_disabled, disabled);
            assert_eq!(s.reset_disabled, disabled);
        }
    }
}

#[test]
fn test_tile_controls_follow_infill_method() {
    for (method, disabled) in [("tile", false), ("patchmatch", true), ("Tile", true), ("", true)] {
        let state = common::state_with(32, method, (512, 512), BoundingBoxScale::Auto);
        let tile = describe(&select_infill_scaling(&state))
            .slider(ControlId::TileSize)
            .cloned()
            .unwrap();
        assert_eq!(tile.slider_disabled, disabled, "{method}");
        assert_eq!(tile.input_disabled, disabled, "{method}");
        assert_eq!(tile.reset_disabled, disabled, "{method}");
    }
}

// ---------------------------------------------------------------------------
// ControlId events
// ---------------------------------------------------------------------------

#[test]
fn test_control_events() {
    assert_eq!(
        ControlId::ScaledWidth.change_event(700.9),
        Some(PanelEvent::ScaledWidthChanged(700.9))
    );
    assert_eq!(
        ControlId::TileSize.change_event(48.0),
        Some(PanelEvent::TileSizeChanged(48))
    );
    assert_eq!(ControlId::ScaleMethod.change_event(1.0), None);
    assert_eq!(
        ControlId::ScaledHeight.reset_event(),
        Some(PanelEvent::ScaledHeightReset)
    );
    assert_eq!(
        ControlId::ScaleMethod.select_event("none"),
        Some(PanelEvent::ScaleMethodSelected(BoundingBoxScale::None))
    );
    assert_eq!(ControlId::ScaleMethod.select_event("bogus"), None);
    assert_eq!(ControlId::TileSize.select_event("tile"), None);
}

#[test]
fn test_tile_change_event_rounds() {
    assert_eq!(
        ControlId::TileSize.change_event(48.7),
        Some(PanelEvent::TileSizeChanged(49))
    );
    assert_eq!(
        ControlId::TileSize.change_event(48.2),
        Some(PanelEvent::TileSizeChanged(48))
    );
}

// ---------------------------------------------------------------------------
// Event validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_rejects_disabled_controls() {
    let description = describe(&select_infill_scaling(&common::patchmatch_auto_state()));

    for event in [
        PanelEvent::TileSizeReset,
        PanelEvent::TileSizeChanged(48),
        PanelEvent::ScaledWidthReset,
        PanelEvent::ScaledHeightChanged(640.0),
    ] {
        assert!(
            matches!(
                description.validate(&event),
                Err(CanvasOptionsError::InvalidEvent { .. })
            ),
            "{event} should be rejected"
        );
    }
}

#[test]
fn test_validate_rejects_out_of_range_values() {
    let state = common::state_with(32, "tile", (512, 512), BoundingBoxScale::Manual);
    let description = describe(&select_infill_scaling(&state));

    assert!(description.validate(&PanelEvent::ScaledWidthChanged(f64::NAN)).is_err());
    assert!(description.validate(&PanelEvent::ScaledWidthChanged(1e12)).is_err());
    assert!(description.validate(&PanelEvent::ScaledHeightChanged(4096.5)).is_err());
    assert!(description.validate(&PanelEvent::ScaledHeightChanged(10.0)).is_err());
    assert!(description.validate(&PanelEvent::TileSizeChanged(257)).is_err());
    assert!(description.validate(&PanelEvent::TileSizeChanged(8)).is_err());
    assert!(description
        .validate(&PanelEvent::InpaintReplaceChanged(f32::NAN))
        .is_err());
}

#[test]
fn test_validate_rejects_unoffered_options() {
    let description = describe(&select_infill_scaling(&common::patchmatch_auto_state()));
    assert!(description
        .validate(&PanelEvent::InfillMethodSelected("lama".into()))
        .is_err());
}

#[test]
fn test_validate_accepts_enabled_controls() {
    let state = common::state_with(32, "tile", (512, 512), BoundingBoxScale::Manual);
    let description = describe(&select_infill_scaling(&state));

    for event in [
        PanelEvent::ScaleMethodSelected(BoundingBoxScale::Auto),
        PanelEvent::ScaledWidthChanged(700.9),
        PanelEvent::ScaledHeightChanged(4096.0),
        PanelEvent::ScaledWidthReset,
        PanelEvent::InfillMethodSelected("patchmatch".into()),
        PanelEvent::TileSizeChanged(200),
        PanelEvent::TileSizeReset,
        PanelEvent::InpaintReplaceChanged(0.5),
        PanelEvent::InpaintReplaceToggled(true),
    ] {
        assert!(description.validate(&event).is_ok(), "{event} should be accepted");
    }
}
