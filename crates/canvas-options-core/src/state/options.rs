use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INFILL_METHOD, DEFAULT_INPAINT_REPLACE, DEFAULT_TILE_SIZE};

/// Generation options edited from the options panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsState {
    pub tile_size: u32,
    pub infill_method: String,
    /// Replacement strength of the inpaint-replace sub-panel (0.0..=1.0).
    pub inpaint_replace: f32,
    pub should_use_inpaint_replace: bool,
}

impl Default for OptionsState {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            infill_method: DEFAULT_INFILL_METHOD.to_string(),
            inpaint_replace: DEFAULT_INPAINT_REPLACE,
            should_use_inpaint_replace: false,
        }
    }
}
