use tracing::debug;

use crate::actions::Action;
use crate::reducer::reduce;
use crate::state::AppState;

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState)>;

/// Anything actions can be sent to.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// Recording dispatcher, handy for driving handlers without a store.
impl Dispatch for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}

/// Single owner of the application state.
///
/// State only changes through [`Store::dispatch`], which runs the root
/// reducer synchronously and then notifies subscribers in subscription order.
pub struct Store {
    state: AppState,
    version: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            version: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of dispatches processed so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Replace the state wholesale (settings import, reset to defaults).
    /// Counts as a dispatch for version tracking.
    pub fn replace_state(&mut self, state: AppState) {
        debug!("store: state replaced");
        self.state = state;
        self.commit();
    }

    fn commit(&mut self) {
        self.version += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        debug!(%action, version = self.version, "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);
        self.commit();
    }
}
