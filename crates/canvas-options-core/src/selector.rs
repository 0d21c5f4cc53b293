use serde::Serialize;

use crate::consts::TILE_INFILL_METHOD;
use crate::state::{AppState, BoundingBoxScale, Dimensions};
use crate::store::Store;

/// The slice of application state the infill & scaling panel reads.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfillScalingView {
    pub bounding_box_scale: BoundingBoxScale,
    pub scaled_bounding_box_dimensions: Dimensions,
    pub tile_size: u32,
    pub infill_method: String,
    pub available_infill_methods: Vec<String>,
    /// Always `bounding_box_scale == Manual`.
    pub is_manual: bool,
}

impl InfillScalingView {
    /// Tile size controls are only live for the tile infill method.
    pub fn is_tile_infill(&self) -> bool {
        self.infill_method == TILE_INFILL_METHOD
    }
}

pub fn select_infill_scaling(state: &AppState) -> InfillScalingView {
    let bounding_box_scale = state.canvas.bounding_box_scale_method;
    InfillScalingView {
        bounding_box_scale,
        scaled_bounding_box_dimensions: state.canvas.scaled_bounding_box_dimensions,
        tile_size: state.options.tile_size,
        infill_method: state.options.infill_method.clone(),
        available_infill_methods: state.system.infill_methods.clone(),
        is_manual: bounding_box_scale == BoundingBoxScale::Manual,
    }
}

/// Caches the last output of a selector and suppresses changes that are
/// structurally equal to it.
pub struct MemoizedSelector<T> {
    select: fn(&AppState) -> T,
    cached: Option<T>,
    last_version: Option<u64>,
    changed: bool,
    recomputations: u64,
    hits: u64,
}

impl<T: PartialEq + Clone> MemoizedSelector<T> {
    pub fn new(select: fn(&AppState) -> T) -> Self {
        Self {
            select,
            cached: None,
            last_version: None,
            changed: false,
            recomputations: 0,
            hits: 0,
        }
    }

    /// Recompute from `state`. The cached value is kept when the fresh one
    /// compares equal, so references handed out earlier stay meaningful.
    pub fn select(&mut self, state: &AppState) -> &T {
        let fresh = (self.select)(state);
        self.recomputations += 1;
        self.last_version = None;

        self.changed = self.cached.as_ref() != Some(&fresh);
        if self.changed {
            self.cached = Some(fresh);
        } else {
            self.hits += 1;
        }
        self.cached_or_insert(state)
    }

    /// Like [`select`](Self::select), but skips recomputation entirely when
    /// the store has not processed a dispatch since the previous call.
    pub fn select_from(&mut self, store: &Store) -> &T {
        let version = store.version();
        if self.last_version == Some(version) && self.cached.is_some() {
            self.changed = false;
            self.hits += 1;
            return self.cached_or_insert(store.state());
        }
        self.select(store.state());
        self.last_version = Some(version);
        self.cached_or_insert(store.state())
    }

    /// Whether the most recent `select*` call produced a new value.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn cached(&self) -> Option<&T> {
        self.cached.as_ref()
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Calls that returned the cached value unchanged.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Drop the cache; the next call reports a change.
    pub fn invalidate(&mut self) {
        self.cached = None;
        self.last_version = None;
    }

    fn cached_or_insert(&mut self, state: &AppState) -> &T {
        let select = self.select;
        self.cached.get_or_insert_with(|| select(state))
    }
}
