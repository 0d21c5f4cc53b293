use console::Style;
use canvas_options_core::actions::Action;
use canvas_options_core::handlers::PanelEvent;
use canvas_options_core::i18n::Localizer;
use canvas_options_core::render::{Control, PanelDescription, SliderControl};
use canvas_options_core::selector::InfillScalingView;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_view(view: &InfillScalingView) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Infill & Scaling"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.method.apply_to(view.bounding_box_scale)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scaled size"),
        s.value.apply_to(view.scaled_bounding_box_dimensions)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Manual"),
        s.value.apply_to(view.is_manual)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Infill"),
        s.method.apply_to(&view.infill_method)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Available"),
        s.value.apply_to(view.available_infill_methods.join(", "))
    );
    let tile = format!("{}", view.tile_size);
    if view.is_tile_infill() {
        println!("  {:<14}{}", s.label.apply_to("Tile size"), s.value.apply_to(tile));
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Tile size"),
            s.disabled.apply_to(format!("{tile} (inactive)"))
        );
    }
    println!();
}

pub fn print_description(description: &PanelDescription, localizer: &impl Localizer) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Controls"));
    for control in &description.controls {
        match control {
            Control::Select(select) => {
                let options: Vec<&str> = select.options.iter().map(|o| o.value.as_str()).collect();
                println!(
                    "    {:<26}{} {}",
                    s.label.apply_to(localizer.translate(select.label)),
                    s.method.apply_to(&select.value),
                    s.label.apply_to(format!("[{}]", options.join(" | ")))
                );
            }
            Control::Slider(slider) => print_slider(&s, slider, localizer),
            Control::SubPanel(panel) => {
                println!(
                    "    {:<26}{}",
                    s.label.apply_to(localizer.translate(panel.label())),
                    s.label.apply_to(format!("<{panel:?} panel>"))
                );
            }
        }
    }
    println!();
}

fn print_slider(s: &Styles, slider: &SliderControl, localizer: &impl Localizer) {
    let bounds = format!(
        "{}..{} step {} (input \u{2264} {})",
        slider.min, slider.max, slider.step, slider.input_max
    );
    let value = format!("{}", slider.value);
    let value = if slider.slider_disabled {
        s.disabled.apply_to(format!("{value} disabled"))
    } else {
        s.value.apply_to(value)
    };
    println!(
        "    {:<26}{} {}",
        s.label.apply_to(localizer.translate(slider.label)),
        value,
        s.label.apply_to(bounds)
    );
}

pub fn print_action(index: usize, event: &PanelEvent, action: &Action) {
    let s = Styles::new();
    println!(
        "  {:>3}. {:<24} {} {}",
        index,
        s.label.apply_to(event),
        s.label.apply_to("\u{2192}"),
        s.method.apply_to(action)
    );
}
