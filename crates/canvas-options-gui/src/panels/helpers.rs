use canvas_options_core::render::SelectOption;

/// Show a ComboBox over string options. Returns the newly picked value.
pub(crate) fn string_combo(
    ui: &mut egui::Ui,
    label: &str,
    current: &str,
    options: &[SelectOption],
) -> Option<String> {
    let mut selected = current.to_string();
    let selected_text = options
        .iter()
        .find(|o| o.value == current)
        .map_or(current, |o| o.label.as_str());

    egui::ComboBox::from_label(label)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut selected, option.value.clone(), option.label.as_str());
            }
        });

    (selected != current).then_some(selected)
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    egui::Frame::NONE.inner_margin(4.0).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(label);
            if let Some(s) = status {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(s);
                });
            }
        });
    });
}
