mod infill_scaling;
mod inpaint_replace;

const PANEL_WIDTH: f32 = 340.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::CanvasOptionsApp) {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.set_max_width(PANEL_WIDTH);
            crate::panels::helpers::section_header(ui, "Infill & Scaling", None);
            ui.add_space(4.0);

            let description = app.panel.refresh(&app.store);
            events = infill_scaling::draw(ui, description, &app.catalog, app.store.state());
        });
    });

    if !events.is_empty() {
        app.handle_events(events);
    }
}
