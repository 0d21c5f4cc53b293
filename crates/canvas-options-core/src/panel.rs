use tracing::{trace, warn};

use crate::handlers::{action_for, PanelEvent};
use crate::render::{describe, PanelDescription};
use crate::selector::{select_infill_scaling, InfillScalingView, MemoizedSelector};
use crate::store::{Dispatch, Store};

/// The infill & scaling options panel: memoized view, cached render
/// description and event forwarding. Holds no state of its own beyond caches.
pub struct InfillScalingPanel {
    selector: MemoizedSelector<InfillScalingView>,
    description: Option<PanelDescription>,
    renders: u64,
    skipped_renders: u64,
}

impl Default for InfillScalingPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InfillScalingPanel {
    pub fn new() -> Self {
        Self {
            selector: MemoizedSelector::new(select_infill_scaling),
            description: None,
            renders: 0,
            skipped_renders: 0,
        }
    }

    /// Re-derive the view from `store` and rebuild the description only when
    /// the view changed structurally.
    pub fn refresh(&mut self, store: &Store) -> &PanelDescription {
        self.selector.select_from(store);
        let stale = self.selector.changed() || self.description.is_none();
        match self.selector.cached() {
            Some(view) if stale => {
                self.description = Some(describe(view));
                self.renders += 1;
                trace!(renders = self.renders, "panel description rebuilt");
            }
            _ => self.skipped_renders += 1,
        }
        self.description
            .get_or_insert_with(|| describe(&select_infill_scaling(store.state())))
    }

    /// Last derived view, if the panel has been refreshed.
    pub fn view(&self) -> Option<&InfillScalingView> {
        self.selector.cached()
    }

    /// Forward `event` as an action, merging dimension changes into the view
    /// from the last refresh. Events can only come from a drawn panel, so an
    /// unrefreshed panel drops them and returns `false`.
    pub fn handle(&self, event: &PanelEvent, dispatch: &mut impl Dispatch) -> bool {
        match self.view() {
            Some(view) => {
                dispatch.dispatch(action_for(event, view));
                true
            }
            None => {
                warn!(%event, "event received before the panel was drawn");
                false
            }
        }
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn skipped_renders(&self) -> u64 {
        self.skipped_renders
    }

    pub fn selector_stats(&self) -> (u64, u64) {
        (self.selector.recomputations(), self.selector.hits())
    }
}
