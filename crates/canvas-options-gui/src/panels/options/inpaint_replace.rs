use canvas_options_core::consts::INPAINT_REPLACE_STEP;
use canvas_options_core::handlers::PanelEvent;
use canvas_options_core::i18n::{LabelKey, Localizer};
use canvas_options_core::state::AppState;

/// Inpaint replace toggle and strength. The strength slider is only live
/// while the toggle is on.
pub(super) fn draw(
    ui: &mut egui::Ui,
    localizer: &impl Localizer,
    state: &AppState,
    events: &mut Vec<PanelEvent>,
) {
    let options = &state.options;

    let mut enabled = options.should_use_inpaint_replace;
    if ui
        .checkbox(&mut enabled, localizer.translate(LabelKey::InpaintReplace).into_owned())
        .changed()
    {
        events.push(PanelEvent::InpaintReplaceToggled(enabled));
    }

    let mut strength = options.inpaint_replace;
    let resp = ui.add_enabled(
        options.should_use_inpaint_replace,
        egui::Slider::new(&mut strength, 0.0..=1.0)
            .step_by(f64::from(INPAINT_REPLACE_STEP))
            .fixed_decimals(2),
    );
    if resp.changed() {
        events.push(PanelEvent::InpaintReplaceChanged(strength));
    }
}
