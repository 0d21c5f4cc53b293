use std::path::PathBuf;

use anyhow::{Context, Result};
use canvas_options_core::panel::InfillScalingPanel;
use canvas_options_core::store::Store;
use clap::Args;

use crate::summary::{print_description, print_view};

#[derive(Args)]
pub struct ViewArgs {
    /// Settings file (TOML); defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ViewArgs) -> Result<()> {
    let settings = super::load_settings(args.config.as_deref())?;
    let catalog = settings.catalog().context("Failed to load locale")?;
    let store = Store::new(settings.initial_state());

    let mut panel = InfillScalingPanel::new();
    let description = panel.refresh(&store).clone();
    if let Some(view) = panel.view() {
        print_view(view);
    }
    print_description(&description, &catalog);

    Ok(())
}
