#[allow(dead_code)]
mod common;

use canvas_options_core::actions::Action;
use canvas_options_core::selector::{select_infill_scaling, MemoizedSelector};
use canvas_options_core::state::{AppState, BoundingBoxScale};
use canvas_options_core::store::{Dispatch, Store};

// ---------------------------------------------------------------------------
// select_infill_scaling
// ---------------------------------------------------------------------------

#[test]
fn test_view_projects_all_fields() {
    let mut state = common::state_with(48, "tile", (640, 320), BoundingBoxScale::Manual);
    state.system.infill_methods = vec!["tile".into(), "lama".into()];

    let view = select_infill_scaling(&state);
    assert_eq!(view.tile_size, 48);
    assert_eq!(view.infill_method, "tile");
    assert_eq!(view.scaled_bounding_box_dimensions, common::dims(640, 320));
    assert_eq!(view.bounding_box_scale, BoundingBoxScale::Manual);
    assert_eq!(view.available_infill_methods, vec!["tile", "lama"]);
}

#[test]
fn test_is_manual_iff_manual() {
    for scale in BoundingBoxScale::ALL {
        let state = common::state_with(32, "tile", (512, 512), *scale);
        let view = select_infill_scaling(&state);
        assert_eq!(view.is_manual, *scale == BoundingBoxScale::Manual, "{scale}");
    }
}

#[test]
fn test_is_tile_infill() {
    let tile = select_infill_scaling(&common::state_with(32, "tile", (512, 512), BoundingBoxScale::Auto));
    let other = select_infill_scaling(&common::patchmatch_auto_state());
    assert!(tile.is_tile_infill());
    assert!(!other.is_tile_infill());
}

#[test]
fn test_selector_is_deterministic() {
    let state = common::patchmatch_auto_state();
    assert_eq!(select_infill_scaling(&state), select_infill_scaling(&state));
}

// ---------------------------------------------------------------------------
// MemoizedSelector
// ---------------------------------------------------------------------------

#[test]
fn test_first_select_reports_change() {
    let mut memo = MemoizedSelector::new(select_infill_scaling);
    memo.select(&AppState::default());
    assert!(memo.changed());
    assert_eq!(memo.recomputations(), 1);
    assert_eq!(memo.hits(), 0);
}

#[test]
fn test_structurally_equal_result_is_suppressed() {
    let mut memo = MemoizedSelector::new(select_infill_scaling);
    let a = AppState::default();
    let b = a.clone();

    memo.select(&a);
    memo.select(&b);
    assert!(!memo.changed());
    assert_eq!(memo.recomputations(), 2);
    assert_eq!(memo.hits(), 1);
}

#[test]
fn test_unrelated_field_change_is_suppressed() {
    let mut memo = MemoizedSelector::new(select_infill_scaling);
    let mut state = AppState::default();
    memo.select(&state);

    // Not part of the derived view.
    state.options.inpaint_replace = 0.9;
    memo.select(&state);
    assert!(!memo.changed());
}

#[test]
fn test_relevant_change_is_reported() {
    let mut memo = MemoizedSelector::new(select_infill_scaling);
    let mut state = AppState::default();
    memo.select(&state);

    state.options.tile_size = 40;
    let view = memo.select(&state).clone();
    assert!(memo.changed());
    assert_eq!(view.tile_size, 40);
}

#[test]
fn test_select_from_short_circuits_on_version() {
    let mut memo = MemoizedSelector::new(select_infill_scaling);
    let mut store = Store::default();

    memo.select_from(&store);
    memo.select_from(&store);
    assert_eq!(memo.recomputations(), 1);
    assert!(!memo.changed());

    store.dispatch(Action::SetTileSize(64));
    assert_eq!(memo.select_from(&store).tile_size, 64);
    assert!(memo.changed());
    assert_eq!(memo.recomputations(), 2);
}

#[test]
fn test_select_from_noop_dispatch_recomputes_without_change() {
    let mut memo = MemoizedSelector::new(select_infill_scaling);
    let mut store = Store::default();
    memo.select_from(&store);

    store.dispatch(Action::SetTileSize(32));
    memo.select_from(&store);
    assert_eq!(memo.recomputations(), 2);
    assert!(!memo.changed());
}

#[test]
fn test_invalidate_forces_change() {
    let mut memo = MemoizedSelector::new(select_infill_scaling);
    let store = Store::default();
    memo.select_from(&store);
    memo.invalidate();
    memo.select_from(&store);
    assert!(memo.changed());
}
