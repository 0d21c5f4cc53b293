use std::path::PathBuf;

use anyhow::{Context, Result};
use canvas_options_core::actions::Action;
use canvas_options_core::handlers::PanelEvent;
use canvas_options_core::panel::InfillScalingPanel;
use canvas_options_core::store::{Dispatch, Store};
use clap::Args;
use tracing::info;

use crate::summary::{print_action, print_description, print_view};

#[derive(Args)]
pub struct SimulateArgs {
    /// Settings file (TOML); defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Events to replay in order, e.g. `scale=manual width=700.9 reset-width`.
    /// An event on a disabled control or outside its input range is an error
    #[arg(required = true)]
    pub events: Vec<String>,

    /// Also print the control layout after the last event
    #[arg(long)]
    pub layout: bool,
}

/// Forwards to the store, keeping a copy of every action.
struct Recorder<'a> {
    store: &'a mut Store,
    actions: Vec<Action>,
}

impl Dispatch for Recorder<'_> {
    fn dispatch(&mut self, action: Action) {
        self.actions.push(action.clone());
        self.store.dispatch(action);
    }
}

pub fn run(args: &SimulateArgs) -> Result<()> {
    let events = args
        .events
        .iter()
        .map(|e| e.parse::<PanelEvent>())
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid event")?;

    let settings = super::load_settings(args.config.as_deref())?;
    let catalog = settings.catalog().context("Failed to load locale")?;
    let mut store = Store::new(settings.initial_state());
    let mut panel = InfillScalingPanel::new();

    // Each event is checked against a fresh render and rejected if the
    // drawn controls could not have produced it.
    let mut recorder = Recorder {
        store: &mut store,
        actions: Vec::new(),
    };
    for (i, event) in events.iter().enumerate() {
        panel
            .refresh(&*recorder.store)
            .validate(event)
            .with_context(|| format!("Event {} cannot be replayed", i + 1))?;
        panel.handle(event, &mut recorder);
    }
    let actions = recorder.actions;
    info!(events = events.len(), version = store.version(), "simulation finished");

    println!();
    for (i, (event, action)) in events.iter().zip(&actions).enumerate() {
        print_action(i + 1, event, action);
    }

    let description = panel.refresh(&store).clone();
    if let Some(view) = panel.view() {
        print_view(view);
    }
    if args.layout {
        print_description(&description, &catalog);
    }

    Ok(())
}
