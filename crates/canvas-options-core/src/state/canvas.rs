use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SCALED_DIMENSION;
use crate::error::CanvasOptionsError;

/// How the generation bounding box is scaled before processing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundingBoxScale {
    None,
    #[default]
    Auto,
    Manual,
}

impl BoundingBoxScale {
    /// Selector order.
    pub const ALL: &[Self] = &[Self::None, Self::Auto, Self::Manual];

    /// Value used in settings files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for BoundingBoxScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Auto => write!(f, "Auto"),
            Self::Manual => write!(f, "Manual"),
        }
    }
}

impl FromStr for BoundingBoxScale {
    type Err = CanvasOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scale| scale.as_str() == s)
            .ok_or_else(|| CanvasOptionsError::UnknownScaleMethod(s.to_string()))
    }
}

/// Width and height of the scaled bounding box, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCALED_DIMENSION,
            height: DEFAULT_SCALED_DIMENSION,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Canvas-level settings relevant to the options panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasState {
    pub bounding_box_scale_method: BoundingBoxScale,
    pub scaled_bounding_box_dimensions: Dimensions,
}
