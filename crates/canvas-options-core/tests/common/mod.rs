use canvas_options_core::state::{AppState, BoundingBoxScale, Dimensions};

/// State with the given panel-relevant fields and defaults elsewhere.
pub fn state_with(
    tile_size: u32,
    infill_method: &str,
    dims: (u32, u32),
    scale: BoundingBoxScale,
) -> AppState {
    let mut state = AppState::default();
    state.options.tile_size = tile_size;
    state.options.infill_method = infill_method.to_string();
    state.canvas.scaled_bounding_box_dimensions = Dimensions {
        width: dims.0,
        height: dims.1,
    };
    state.canvas.bounding_box_scale_method = scale;
    state
}

/// The "patchmatch, auto, 512x512, tile 32" starting point.
pub fn patchmatch_auto_state() -> AppState {
    state_with(32, "patchmatch", (512, 512), BoundingBoxScale::Auto)
}

pub fn dims(width: u32, height: u32) -> Dimensions {
    Dimensions { width, height }
}
