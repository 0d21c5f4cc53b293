use std::path::PathBuf;

use canvas_options_core::i18n::Catalog;
use canvas_options_core::settings::Settings;

/// Results sent from file dialog threads back to the UI thread.
pub enum AppMessage {
    SettingsImported { path: PathBuf, settings: Settings },
    SettingsExported { path: PathBuf },
    LocaleLoaded { path: PathBuf, catalog: Catalog },
    Error { message: String },
}
