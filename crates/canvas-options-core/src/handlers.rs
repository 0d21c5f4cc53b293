//! Event handlers of the infill & scaling panel.
//!
//! Each handler is a pure function from a widget event to the [`Action`]
//! that should be dispatched. Nothing here validates values: the widgets
//! only ever offer values from their own closed sets and ranges.

use std::fmt;
use std::str::FromStr;

use crate::actions::Action;
use crate::consts::{DEFAULT_SCALED_DIMENSION, DEFAULT_TILE_SIZE};
use crate::error::CanvasOptionsError;
use crate::selector::InfillScalingView;
use crate::state::{BoundingBoxScale, Dimensions};

/// Slider values arrive as floats; dimensions are whole pixels rounded down.
/// Negative input saturates to 0.
fn floor_dimension(v: f64) -> u32 {
    v.floor() as u32
}

pub fn on_change_scaled_width(current: Dimensions, v: f64) -> Action {
    Action::SetScaledBoundingBoxDimensions(Dimensions {
        width: floor_dimension(v),
        ..current
    })
}

pub fn on_change_scaled_height(current: Dimensions, v: f64) -> Action {
    Action::SetScaledBoundingBoxDimensions(Dimensions {
        height: floor_dimension(v),
        ..current
    })
}

pub fn on_reset_scaled_width(current: Dimensions) -> Action {
    Action::SetScaledBoundingBoxDimensions(Dimensions {
        width: DEFAULT_SCALED_DIMENSION,
        ..current
    })
}

pub fn on_reset_scaled_height(current: Dimensions) -> Action {
    Action::SetScaledBoundingBoxDimensions(Dimensions {
        height: DEFAULT_SCALED_DIMENSION,
        ..current
    })
}

pub fn on_change_bounding_box_scale_method(selected: BoundingBoxScale) -> Action {
    Action::SetBoundingBoxScaleMethod(selected)
}

pub fn on_change_infill_method(selected: &str) -> Action {
    Action::SetInfillMethod(selected.to_string())
}

pub fn on_change_tile_size(v: u32) -> Action {
    Action::SetTileSize(v)
}

pub fn on_reset_tile_size() -> Action {
    Action::SetTileSize(DEFAULT_TILE_SIZE)
}

pub fn on_change_inpaint_replace(v: f32) -> Action {
    Action::SetInpaintReplace(v)
}

pub fn on_toggle_inpaint_replace(enabled: bool) -> Action {
    Action::SetShouldUseInpaintReplace(enabled)
}

/// A discrete user interaction with the panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    ScaleMethodSelected(BoundingBoxScale),
    ScaledWidthChanged(f64),
    ScaledWidthReset,
    ScaledHeightChanged(f64),
    ScaledHeightReset,
    InfillMethodSelected(String),
    TileSizeChanged(u32),
    TileSizeReset,
    InpaintReplaceChanged(f32),
    InpaintReplaceToggled(bool),
}

/// Map an event to its action. Dimension events merge into the dimensions
/// currently shown by `view`.
pub fn action_for(event: &PanelEvent, view: &InfillScalingView) -> Action {
    let dims = view.scaled_bounding_box_dimensions;
    match event {
        PanelEvent::ScaleMethodSelected(scale) => on_change_bounding_box_scale_method(*scale),
        PanelEvent::ScaledWidthChanged(v) => on_change_scaled_width(dims, *v),
        PanelEvent::ScaledWidthReset => on_reset_scaled_width(dims),
        PanelEvent::ScaledHeightChanged(v) => on_change_scaled_height(dims, *v),
        PanelEvent::ScaledHeightReset => on_reset_scaled_height(dims),
        PanelEvent::InfillMethodSelected(method) => on_change_infill_method(method),
        PanelEvent::TileSizeChanged(v) => on_change_tile_size(*v),
        PanelEvent::TileSizeReset => on_reset_tile_size(),
        PanelEvent::InpaintReplaceChanged(v) => on_change_inpaint_replace(*v),
        PanelEvent::InpaintReplaceToggled(b) => on_toggle_inpaint_replace(*b),
    }
}

impl fmt::Display for PanelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleMethodSelected(scale) => write!(f, "scale={}", scale.as_str()),
            Self::ScaledWidthChanged(v) => write!(f, "width={v}"),
            Self::ScaledWidthReset => write!(f, "reset-width"),
            Self::ScaledHeightChanged(v) => write!(f, "height={v}"),
            Self::ScaledHeightReset => write!(f, "reset-height"),
            Self::InfillMethodSelected(method) => write!(f, "infill={method}"),
            Self::TileSizeChanged(v) => write!(f, "tile={v}"),
            Self::TileSizeReset => write!(f, "reset-tile"),
            Self::InpaintReplaceChanged(v) => write!(f, "inpaint-replace={v}"),
            Self::InpaintReplaceToggled(b) => write!(f, "use-inpaint-replace={b}"),
        }
    }
}

/// Parses the `key=value` / `reset-*` syntax produced by `Display`.
impl FromStr for PanelEvent {
    type Err = CanvasOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CanvasOptionsError::InvalidEvent {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        match s.trim() {
            "reset-width" => return Ok(Self::ScaledWidthReset),
            "reset-height" => return Ok(Self::ScaledHeightReset),
            "reset-tile" => return Ok(Self::TileSizeReset),
            _ => {}
        }

        let (key, value) = s
            .trim()
            .split_once('=')
            .ok_or_else(|| invalid("expected key=value or reset-*"))?;
        let value = value.trim();

        match key.trim() {
            "scale" => Ok(Self::ScaleMethodSelected(value.parse()?)),
            "width" => value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::ScaledWidthChanged)
                .ok_or_else(|| invalid("width must be a finite number")),
            "height" => value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::ScaledHeightChanged)
                .ok_or_else(|| invalid("height must be a finite number")),
            "infill" if !value.is_empty() => Ok(Self::InfillMethodSelected(value.to_string())),
            "infill" => Err(invalid("infill method must not be empty")),
            "tile" => value
                .parse()
                .map(Self::TileSizeChanged)
                .map_err(|_| invalid("tile size must be a non-negative integer")),
            "inpaint-replace" => value
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::InpaintReplaceChanged)
                .ok_or_else(|| invalid("inpaint replace must be a finite number")),
            "use-inpaint-replace" => value
                .parse()
                .map(Self::InpaintReplaceToggled)
                .map_err(|_| invalid("expected true or false")),
            other => Err(invalid(&format!("unknown control '{other}'"))),
        }
    }
}
