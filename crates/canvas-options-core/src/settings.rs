use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::i18n::Catalog;
use crate::state::{AppState, CanvasState, OptionsState, SystemState};

/// Startup settings: initial values of every state slice plus an optional
/// locale file. Missing sections take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<PathBuf>,
    #[serde(default)]
    pub canvas: CanvasState,
    #[serde(default)]
    pub options: OptionsState,
    #[serde(default)]
    pub system: SystemState,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Relative locale paths are resolved against the settings file's
    /// directory and made absolute, so a later `save` elsewhere still points
    /// at the same file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut settings = Self::from_toml_str(&content)?;
        if let (Some(locale), Some(dir)) = (settings.locale.as_mut(), path.parent()) {
            if locale.is_relative() {
                *locale = std::path::absolute(dir.join(&*locale))?;
            }
        }
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn initial_state(&self) -> AppState {
        AppState {
            options: self.options.clone(),
            system: self.system.clone(),
            canvas: self.canvas.clone(),
        }
    }

    /// Snapshot the current state back into settings, keeping the locale.
    pub fn with_state(&self, state: &AppState) -> Self {
        Self {
            locale: self.locale.clone(),
            canvas: state.canvas.clone(),
            options: state.options.clone(),
            system: state.system.clone(),
        }
    }

    /// The configured locale, or the bundled English strings.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.locale {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::english()),
        }
    }
}
