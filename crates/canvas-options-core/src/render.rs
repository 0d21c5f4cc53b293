//! Declarative description of the infill & scaling panel.
//!
//! [`describe`] turns a derived view into an ordered list of controls. The
//! host UI draws it and reports interactions back as [`PanelEvent`]s.

use serde::Serialize;

use crate::consts::{
    SCALED_DIMENSION_INPUT_MAX, SCALED_DIMENSION_MAX, SCALED_DIMENSION_MIN,
    SCALED_DIMENSION_STEP, TILE_SIZE_INPUT_MAX, TILE_SIZE_MARK_RIGHT_OFFSET, TILE_SIZE_MAX,
    TILE_SIZE_MIN, TILE_SIZE_STEP,
};
use crate::error::{CanvasOptionsError, Result};
use crate::handlers::PanelEvent;
use crate::i18n::LabelKey;
use crate::selector::InfillScalingView;
use crate::state::BoundingBoxScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ControlId {
    ScaleMethod,
    ScaledWidth,
    ScaledHeight,
    InfillMethod,
    TileSize,
}

impl ControlId {
    /// Event for a new slider value. `None` for non-slider controls.
    ///
    /// Tile size is rounded to the nearest whole number, since a typed
    /// input can carry a fraction. Dimensions pass through and are floored
    /// by their handlers.
    pub fn change_event(&self, value: f64) -> Option<PanelEvent> {
        match self {
            Self::ScaledWidth => Some(PanelEvent::ScaledWidthChanged(value)),
            Self::ScaledHeight => Some(PanelEvent::ScaledHeightChanged(value)),
            Self::TileSize => Some(PanelEvent::TileSizeChanged(value.round() as u32)),
            Self::ScaleMethod | Self::InfillMethod => None,
        }
    }

    /// Event for a new selector value. `None` for sliders, or when the value
    /// is not a member of the control's set.
    pub fn select_event(&self, value: &str) -> Option<PanelEvent> {
        match self {
            Self::ScaleMethod => value.parse().ok().map(PanelEvent::ScaleMethodSelected),
            Self::InfillMethod => Some(PanelEvent::InfillMethodSelected(value.to_string())),
            _ => None,
        }
    }

    pub fn reset_event(&self) -> Option<PanelEvent> {
        match self {
            Self::ScaledWidth => Some(PanelEvent::ScaledWidthReset),
            Self::ScaledHeight => Some(PanelEvent::ScaledHeightReset),
            Self::TileSize => Some(PanelEvent::TileSizeReset),
            Self::ScaleMethod | Self::InfillMethod => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectControl {
    pub id: ControlId,
    pub label: LabelKey,
    pub value: String,
    pub options: Vec<SelectOption>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SliderControl {
    pub id: ControlId,
    pub label: LabelKey,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Upper bound of the numeric input, which may exceed `max`.
    pub input_max: f64,
    pub slider_disabled: bool,
    pub input_disabled: bool,
    pub reset_disabled: bool,
    pub with_slider_marks: bool,
    pub with_input: bool,
    pub input_read_only: bool,
    pub with_reset: bool,
    pub slider_mark_right_offset: Option<f32>,
}

/// Embedded panels whose contents are owned elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SubPanel {
    InpaintReplace,
}

impl SubPanel {
    pub fn label(&self) -> LabelKey {
        match self {
            Self::InpaintReplace => LabelKey::InpaintReplace,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Control {
    Select(SelectControl),
    Slider(SliderControl),
    SubPanel(SubPanel),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelDescription {
    pub controls: Vec<Control>,
}

impl PanelDescription {
    pub fn slider(&self, id: ControlId) -> Option<&SliderControl> {
        self.controls.iter().find_map(|c| match c {
            Control::Slider(s) if s.id == id => Some(s),
            _ => None,
        })
    }

    pub fn select(&self, id: ControlId) -> Option<&SelectControl> {
        self.controls.iter().find_map(|c| match c {
            Control::Select(s) if s.id == id => Some(s),
            _ => None,
        })
    }

    /// Checks that `event` could come from the controls as drawn: the target
    /// is enabled, a value lies within `min..=input_max`, and a selection is
    /// one of the offered options. Inpaint-replace events belong to the
    /// sub-panel and are only checked for finite strength.
    pub fn validate(&self, event: &PanelEvent) -> Result<()> {
        match event {
            PanelEvent::ScaledWidthChanged(v) => self.check_value(ControlId::ScaledWidth, *v),
            PanelEvent::ScaledHeightChanged(v) => self.check_value(ControlId::ScaledHeight, *v),
            PanelEvent::TileSizeChanged(v) => self.check_value(ControlId::TileSize, f64::from(*v)),
            PanelEvent::ScaledWidthReset => self.check_reset(ControlId::ScaledWidth),
            PanelEvent::ScaledHeightReset => self.check_reset(ControlId::ScaledHeight),
            PanelEvent::TileSizeReset => self.check_reset(ControlId::TileSize),
            PanelEvent::ScaleMethodSelected(scale) => {
                self.check_option(ControlId::ScaleMethod, scale.as_str())
            }
            PanelEvent::InfillMethodSelected(method) => {
                self.check_option(ControlId::InfillMethod, method)
            }
            PanelEvent::InpaintReplaceChanged(v) if !v.is_finite() => {
                Err("inpaint replace must be a finite number".to_string())
            }
            PanelEvent::InpaintReplaceChanged(_) | PanelEvent::InpaintReplaceToggled(_) => Ok(()),
        }
        .map_err(|reason| CanvasOptionsError::InvalidEvent {
            input: event.to_string(),
            reason,
        })
    }

    fn check_value(&self, id: ControlId, value: f64) -> std::result::Result<(), String> {
        let slider = self.slider(id).ok_or_else(|| format!("{id:?} is not shown"))?;
        if slider.slider_disabled && slider.input_disabled {
            return Err(format!("{id:?} is disabled"));
        }
        if !value.is_finite() || value < slider.min || value > slider.input_max {
            return Err(format!(
                "{value} is outside {}..={}",
                slider.min, slider.input_max
            ));
        }
        Ok(())
    }

    fn check_reset(&self, id: ControlId) -> std::result::Result<(), String> {
        let slider = self.slider(id).ok_or_else(|| format!("{id:?} is not shown"))?;
        if !slider.with_reset || slider.reset_disabled {
            return Err(format!("{id:?} reset is disabled"));
        }
        Ok(())
    }

    fn check_option(&self, id: ControlId, value: &str) -> std::result::Result<(), String> {
        let select = self.select(id).ok_or_else(|| format!("{id:?} is not shown"))?;
        if !select.options.iter().any(|o| o.value == value) {
            return Err(format!("'{value}' is not one of the {id:?} options"));
        }
        Ok(())
    }
}

fn scaled_dimension_slider(
    id: ControlId,
    label: LabelKey,
    value: u32,
    is_manual: bool,
) -> SliderControl {
    SliderControl {
        id,
        label,
        value: f64::from(value),
        min: f64::from(SCALED_DIMENSION_MIN),
        max: f64::from(SCALED_DIMENSION_MAX),
        step: f64::from(SCALED_DIMENSION_STEP),
        input_max: f64::from(SCALED_DIMENSION_INPUT_MAX),
        slider_disabled: !is_manual,
        input_disabled: !is_manual,
        reset_disabled: !is_manual,
        with_slider_marks: true,
        with_input: true,
        input_read_only: true,
        with_reset: true,
        slider_mark_right_offset: None,
    }
}

pub fn describe(view: &InfillScalingView) -> PanelDescription {
    let dims = view.scaled_bounding_box_dimensions;
    let tile_disabled = !view.is_tile_infill();

    let controls = vec![
        Control::Select(SelectControl {
            id: ControlId::ScaleMethod,
            label: LabelKey::ScaleBeforeProcessing,
            value: view.bounding_box_scale.as_str().to_string(),
            options: BoundingBoxScale::ALL
                .iter()
                .map(|scale| SelectOption {
                    label: scale.to_string(),
                    value: scale.as_str().to_string(),
                })
                .collect(),
        }),
        Control::Slider(scaled_dimension_slider(
            ControlId::ScaledWidth,
            LabelKey::ScaledWidth,
            dims.width,
            view.is_manual,
        )),
        Control::Slider(scaled_dimension_slider(
            ControlId::ScaledHeight,
            LabelKey::ScaledHeight,
            dims.height,
            view.is_manual,
        )),
        Control::SubPanel(SubPanel::InpaintReplace),
        Control::Select(SelectControl {
            id: ControlId::InfillMethod,
            label: LabelKey::InfillMethod,
            value: view.infill_method.clone(),
            options: view
                .available_infill_methods
                .iter()
                .map(|m| SelectOption {
                    label: m.clone(),
                    value: m.clone(),
                })
                .collect(),
        }),
        Control::Slider(SliderControl {
            id: ControlId::TileSize,
            label: LabelKey::TileSize,
            value: f64::from(view.tile_size),
            min: f64::from(TILE_SIZE_MIN),
            max: f64::from(TILE_SIZE_MAX),
            step: f64::from(TILE_SIZE_STEP),
            input_max: f64::from(TILE_SIZE_INPUT_MAX),
            slider_disabled: tile_disabled,
            input_disabled: tile_disabled,
            reset_disabled: tile_disabled,
            with_slider_marks: true,
            with_input: true,
            input_read_only: false,
            with_reset: true,
            slider_mark_right_offset: Some(TILE_SIZE_MARK_RIGHT_OFFSET),
        }),
    ];

    PanelDescription { controls }
}
