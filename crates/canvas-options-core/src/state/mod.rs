mod canvas;
mod options;
mod system;

use serde::{Deserialize, Serialize};

pub use canvas::{BoundingBoxScale, CanvasState, Dimensions};
pub use options::OptionsState;
pub use system::SystemState;

/// The whole application state owned by the [`Store`](crate::store::Store).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub options: OptionsState,
    #[serde(default)]
    pub system: SystemState,
    #[serde(default)]
    pub canvas: CanvasState,
}
