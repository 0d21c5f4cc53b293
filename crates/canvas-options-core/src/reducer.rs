//! Pure reducers: each slice applies the actions it owns and ignores the rest.

use crate::actions::{Action, Slice};
use crate::state::{AppState, CanvasState, OptionsState, SystemState};

impl OptionsState {
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::SetInfillMethod(method) => self.infill_method = method.clone(),
            Action::SetTileSize(size) => self.tile_size = *size,
            Action::SetInpaintReplace(v) => self.inpaint_replace = v.clamp(0.0, 1.0),
            Action::SetShouldUseInpaintReplace(b) => self.should_use_inpaint_replace = *b,
            _ => {}
        }
    }
}

impl SystemState {
    pub fn reduce(&mut self, action: &Action) {
        if let Action::SetInfillMethods(methods) = action {
            self.infill_methods = methods.clone();
        }
    }
}

impl CanvasState {
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::SetBoundingBoxScaleMethod(scale) => self.bounding_box_scale_method = *scale,
            Action::SetScaledBoundingBoxDimensions(dims) => {
                self.scaled_bounding_box_dimensions = *dims
            }
            _ => {}
        }
    }
}

/// Root reducer. Consumes the previous state and returns the next one.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action.slice() {
        Slice::Options => state.options.reduce(action),
        Slice::System => state.system.reduce(action),
        Slice::Canvas => state.canvas.reduce(action),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BoundingBoxScale, Dimensions};

    #[test]
    fn slices_ignore_foreign_actions() {
        let mut options = OptionsState::default();
        options.reduce(&Action::SetBoundingBoxScaleMethod(BoundingBoxScale::Manual));
        assert_eq!(options, OptionsState::default());

        let mut canvas = CanvasState::default();
        canvas.reduce(&Action::SetTileSize(48));
        assert_eq!(canvas, CanvasState::default());
    }

    #[test]
    fn dimensions_are_replaced_wholesale() {
        let state = reduce(
            AppState::default(),
            &Action::SetScaledBoundingBoxDimensions(Dimensions {
                width: 640,
                height: 128,
            }),
        );
        assert_eq!(state.canvas.scaled_bounding_box_dimensions.width, 640);
        assert_eq!(state.canvas.scaled_bounding_box_dimensions.height, 128);
    }

    #[test]
    fn inpaint_replace_is_clamped() {
        let state = reduce(AppState::default(), &Action::SetInpaintReplace(1.7));
        assert_eq!(state.options.inpaint_replace, 1.0);
        let state = reduce(state, &Action::SetInpaintReplace(-0.2));
        assert_eq!(state.options.inpaint_replace, 0.0);
    }
}
