use std::fmt;

use crate::state::{BoundingBoxScale, Dimensions};

/// State slice an [`Action`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slice {
    Options,
    System,
    Canvas,
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options => write!(f, "options"),
            Self::System => write!(f, "system"),
            Self::Canvas => write!(f, "canvas"),
        }
    }
}

/// A plain update request dispatched to the store.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetBoundingBoxScaleMethod(BoundingBoxScale),
    /// Replaces the whole dimensions object; callers merge beforehand.
    SetScaledBoundingBoxDimensions(Dimensions),
    SetInfillMethod(String),
    SetTileSize(u32),
    SetInpaintReplace(f32),
    SetShouldUseInpaintReplace(bool),
    SetInfillMethods(Vec<String>),
}

impl Action {
    pub fn slice(&self) -> Slice {
        match self {
            Self::SetBoundingBoxScaleMethod(_) | Self::SetScaledBoundingBoxDimensions(_) => {
                Slice::Canvas
            }
            Self::SetInfillMethod(_)
            | Self::SetTileSize(_)
            | Self::SetInpaintReplace(_)
            | Self::SetShouldUseInpaintReplace(_) => Slice::Options,
            Self::SetInfillMethods(_) => Slice::System,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::SetBoundingBoxScaleMethod(_) => "setBoundingBoxScaleMethod",
            Self::SetScaledBoundingBoxDimensions(_) => "setScaledBoundingBoxDimensions",
            Self::SetInfillMethod(_) => "setInfillMethod",
            Self::SetTileSize(_) => "setTileSize",
            Self::SetInpaintReplace(_) => "setInpaintReplace",
            Self::SetShouldUseInpaintReplace(_) => "setShouldUseInpaintReplace",
            Self::SetInfillMethods(_) => "setInfillMethods",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ", self.slice(), self.name())?;
        match self {
            Self::SetBoundingBoxScaleMethod(scale) => write!(f, "{}", scale.as_str()),
            Self::SetScaledBoundingBoxDimensions(dims) => write!(f, "{dims}"),
            Self::SetInfillMethod(method) => write!(f, "{method}"),
            Self::SetTileSize(size) => write!(f, "{size}"),
            Self::SetInpaintReplace(v) => write!(f, "{v:.2}"),
            Self::SetShouldUseInpaintReplace(b) => write!(f, "{b}"),
            Self::SetInfillMethods(methods) => write!(f, "[{}]", methods.join(", ")),
        }
    }
}
