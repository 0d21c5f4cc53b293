/// Value written by the scaled width/height reset buttons.
pub const DEFAULT_SCALED_DIMENSION: u32 = 512;

/// Value written by the tile size reset button.
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Infill method that enables the tile size controls.
pub const TILE_INFILL_METHOD: &str = "tile";

/// Infill method selected on a fresh state.
pub const DEFAULT_INFILL_METHOD: &str = "patchmatch";

/// Infill methods assumed available until the backend reports its own list.
pub const DEFAULT_INFILL_METHODS: &[&str] = &["patchmatch", "tile"];

/// Scaled bounding box slider range.
pub const SCALED_DIMENSION_MIN: u32 = 64;
pub const SCALED_DIMENSION_MAX: u32 = 1024;
pub const SCALED_DIMENSION_STEP: u32 = 64;

/// The numeric input next to the scaled dimension sliders accepts values
/// beyond the slider range, up to this ceiling.
pub const SCALED_DIMENSION_INPUT_MAX: u32 = 4096;

/// Tile size slider range.
pub const TILE_SIZE_MIN: u32 = 16;
pub const TILE_SIZE_MAX: u32 = 64;
pub const TILE_SIZE_STEP: u32 = 1;

/// Ceiling of the tile size numeric input.
pub const TILE_SIZE_INPUT_MAX: u32 = 256;

/// Horizontal nudge (in points) of the tile size slider's right-hand mark.
pub const TILE_SIZE_MARK_RIGHT_OFFSET: f32 = -4.0;

/// Inpaint replace strength on a fresh state.
pub const DEFAULT_INPAINT_REPLACE: f32 = 0.1;

/// Inpaint replace slider step.
pub const INPAINT_REPLACE_STEP: f32 = 0.05;
