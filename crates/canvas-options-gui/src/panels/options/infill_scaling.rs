use canvas_options_core::handlers::PanelEvent;
use canvas_options_core::i18n::Localizer;
use canvas_options_core::render::{Control, PanelDescription, SelectControl, SliderControl, SubPanel};
use canvas_options_core::state::AppState;

use crate::panels::helpers::string_combo;

/// Draw every control of `description` top to bottom and collect the
/// interactions of this frame.
pub(super) fn draw(
    ui: &mut egui::Ui,
    description: &PanelDescription,
    localizer: &impl Localizer,
    state: &AppState,
) -> Vec<PanelEvent> {
    let mut events = Vec::new();

    for control in &description.controls {
        match control {
            Control::Select(select) => select_row(ui, select, localizer, &mut events),
            Control::Slider(slider) => slider_row(ui, slider, localizer, &mut events),
            Control::SubPanel(SubPanel::InpaintReplace) => {
                super::inpaint_replace::draw(ui, localizer, state, &mut events)
            }
        }
        ui.add_space(6.0);
    }

    events
}

fn select_row(
    ui: &mut egui::Ui,
    select: &SelectControl,
    localizer: &impl Localizer,
    events: &mut Vec<PanelEvent>,
) {
    let label = localizer.translate(select.label);
    if let Some(value) = string_combo(ui, &label, &select.value, &select.options) {
        events.extend(select.id.select_event(&value));
    }
}

fn slider_row(
    ui: &mut egui::Ui,
    slider: &SliderControl,
    localizer: &impl Localizer,
    events: &mut Vec<PanelEvent>,
) {
    ui.label(localizer.translate(slider.label).into_owned());

    ui.horizontal(|ui| {
        let mut value = slider.value;
        let resp = ui.add_enabled(
            !slider.slider_disabled,
            egui::Slider::new(&mut value, slider.min..=slider.max)
                .step_by(slider.step)
                .show_value(false),
        );
        if resp.changed() {
            events.extend(slider.id.change_event(value));
        }

        if slider.with_input {
            if slider.input_read_only {
                ui.add_enabled_ui(!slider.input_disabled, |ui| {
                    ui.monospace(format!("{:>4}", slider.value));
                });
            } else {
                let mut input = slider.value;
                let resp = ui.add_enabled(
                    !slider.input_disabled,
                    egui::DragValue::new(&mut input)
                        .range(slider.min..=slider.input_max)
                        .speed(slider.step),
                );
                if resp.changed() {
                    events.extend(slider.id.change_event(input));
                }
            }
        }

        if slider.with_reset
            && ui
                .add_enabled(!slider.reset_disabled, egui::Button::new("Reset").small())
                .clicked()
        {
            events.extend(slider.id.reset_event());
        }
    });

    if slider.with_slider_marks {
        slider_marks(ui, slider);
    }
}

fn slider_marks(ui: &mut egui::Ui, slider: &SliderControl) {
    let right_offset = slider.slider_mark_right_offset.unwrap_or(0.0);
    ui.horizontal(|ui| {
        ui.set_width(ui.spacing().slider_width);
        ui.small(format!("{}", slider.min));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(-right_offset);
            ui.small(format!("{}", slider.max));
        });
    });
}
