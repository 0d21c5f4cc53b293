use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_INFILL_METHODS;

/// Capabilities reported by the generation backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemState {
    pub infill_methods: Vec<String>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            infill_methods: DEFAULT_INFILL_METHODS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}
