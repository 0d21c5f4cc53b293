pub mod config;
pub mod simulate;
pub mod view;

use std::path::Path;

use anyhow::{Context, Result};
use canvas_options_core::settings::Settings;

/// Settings from `path`, or defaults when no file is given.
pub(crate) fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}
