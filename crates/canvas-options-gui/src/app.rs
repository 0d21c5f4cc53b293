use std::sync::mpsc;

use canvas_options_core::actions::Action;
use canvas_options_core::handlers::PanelEvent;
use canvas_options_core::i18n::Catalog;
use canvas_options_core::panel::InfillScalingPanel;
use canvas_options_core::settings::Settings;
use canvas_options_core::state::AppState;
use canvas_options_core::store::{Dispatch, Store};
use tracing::{info, warn};

use crate::messages::AppMessage;
use crate::panels;
use crate::states::UIState;

pub struct CanvasOptionsApp {
    pub store: Store,
    pub panel: InfillScalingPanel,
    pub catalog: Catalog,
    pub settings: Settings,
    pub ui_state: UIState,
    pub msg_tx: mpsc::Sender<AppMessage>,
    msg_rx: mpsc::Receiver<AppMessage>,
}

/// Dispatcher that logs each action to the status panel on its way to the
/// store.
struct LoggedDispatch<'a> {
    store: &'a mut Store,
    ui_state: &'a mut UIState,
}

impl Dispatch for LoggedDispatch<'_> {
    fn dispatch(&mut self, action: Action) {
        self.ui_state.add_log(action.to_string());
        self.store.dispatch(action);
    }
}

impl CanvasOptionsApp {
    pub fn new(ctx: &egui::Context, settings: Settings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        let catalog = settings.catalog().unwrap_or_else(|e| {
            warn!("Failed to load locale: {e}");
            Catalog::english()
        });

        let mut store = Store::new(settings.initial_state());
        let repaint = ctx.clone();
        store.subscribe(move |_| repaint.request_repaint());

        Self {
            store,
            panel: InfillScalingPanel::new(),
            catalog,
            settings,
            ui_state: UIState::default(),
            msg_tx,
            msg_rx,
        }
    }

    /// Drain results from dialog threads.
    fn poll_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                AppMessage::SettingsImported { path, settings } => {
                    match settings.catalog() {
                        Ok(catalog) => self.catalog = catalog,
                        Err(e) => self.ui_state.add_log(format!("ERROR: locale: {e}")),
                    }
                    self.store.replace_state(settings.initial_state());
                    self.settings = settings;
                    info!(path = %path.display(), "settings imported");
                    self.ui_state.add_log(format!("Imported: {}", path.display()));
                }
                AppMessage::SettingsExported { path } => {
                    self.ui_state.add_log(format!("Exported: {}", path.display()));
                }
                AppMessage::LocaleLoaded { path, catalog } => {
                    self.catalog = catalog;
                    self.settings.locale = Some(path.clone());
                    self.ui_state.add_log(format!("Locale: {}", path.display()));
                }
                AppMessage::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    pub fn handle_events(&mut self, events: Vec<PanelEvent>) {
        let mut dispatch = LoggedDispatch {
            store: &mut self.store,
            ui_state: &mut self.ui_state,
        };
        for event in &events {
            self.panel.handle(event, &mut dispatch);
        }
    }

    /// Back to default options and canvas values. The backend's infill
    /// method list is kept.
    pub fn reset_defaults(&mut self) {
        let state = AppState {
            system: self.store.state().system.clone(),
            ..AppState::default()
        };
        self.store.replace_state(state);
        self.ui_state.add_log("Options reset to defaults".into());
    }
}

impl eframe::App for CanvasOptionsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::options::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Canvas Options")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Canvas Options");
                        ui.label("Infill & scaling settings");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
