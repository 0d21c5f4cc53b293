use canvas_options_core::i18n::Catalog;
use canvas_options_core::settings::Settings;

use crate::app::CanvasOptionsApp;
use crate::messages::AppMessage;

pub fn show(ctx: &egui::Context, app: &mut CanvasOptionsApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Import Settings...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    import_settings(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui.add(egui::Button::new("Export Settings...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    export_settings(app);
                }

                ui.separator();

                if ui.button("Load Locale...").clicked() {
                    ui.close();
                    load_locale(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.reset_defaults();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            import_settings(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            export_settings(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_settings(app: &mut CanvasOptionsApp) {
    let msg_tx = app.msg_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let msg = match Settings::load(&path) {
            Ok(settings) => AppMessage::SettingsImported { path, settings },
            Err(e) => AppMessage::Error {
                message: format!("{}: {e}", path.display()),
            },
        };
        let _ = msg_tx.send(msg);
    });
}

fn export_settings(app: &mut CanvasOptionsApp) {
    let settings = app.settings.with_state(app.store.state());
    let msg_tx = app.msg_tx.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("canvas_options.toml")
            .save_file()
        else {
            return;
        };
        let msg = match settings.save(&path) {
            Ok(()) => AppMessage::SettingsExported { path },
            Err(e) => AppMessage::Error {
                message: format!("{}: {e}", path.display()),
            },
        };
        let _ = msg_tx.send(msg);
    });
}

fn load_locale(app: &mut CanvasOptionsApp) {
    let msg_tx = app.msg_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let msg = match Catalog::load(&path) {
            Ok(catalog) => AppMessage::LocaleLoaded { path, catalog },
            Err(e) => AppMessage::Error {
                message: format!("{}: {e}", path.display()),
            },
        };
        let _ = msg_tx.send(msg);
    });
}
