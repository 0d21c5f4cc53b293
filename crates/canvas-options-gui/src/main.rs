mod app;
mod messages;
mod panels;
mod states;

use std::path::PathBuf;

use anyhow::Context;
use canvas_options_core::settings::Settings;

fn load_settings(path: Option<PathBuf>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = load_settings(std::env::args_os().nth(1).map(PathBuf::from)).unwrap_or_else(|e| {
        tracing::warn!("{e:#}; using defaults");
        Settings::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Canvas Options"),
        ..Default::default()
    };

    eframe::run_native(
        "CanvasOptions",
        options,
        Box::new(move |cc| Ok(Box::new(app::CanvasOptionsApp::new(&cc.egui_ctx, settings)))),
    )
}
