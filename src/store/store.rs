//! Story store
//!
//! Shared handle over `StoriesState`. Dispatching runs the reducer and then
//! tells every subscriber about the new state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::{reduce, RawAction, StoriesAction, StoriesState};
use crate::error::Result;

type Subscriber = Box<dyn Fn(&StoriesState) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Thread-safe, cloneable story store
///
/// ## Concurrency:
/// - `dispatch_lock`: Mutex held across reduce and notify, so subscribers
///   see snapshots in transition order even with concurrent dispatchers
/// - `state`: RwLock, write-held only while the reducer runs
/// - `subscribers`: RwLock, read-held while notifying
/// - Clones share the same state and subscribers
///
/// Subscribers receive a snapshot taken right after their dispatch. They may
/// read the store but must not dispatch, subscribe or unsubscribe from inside
/// the callback.
#[derive(Clone)]
pub struct StoryStore {
    state: Arc<RwLock<StoriesState>>,
    dispatch_lock: Arc<Mutex<()>>,
    subscribers: Arc<RwLock<Vec<(SubscriptionId, Subscriber)>>>,
    next_subscription: Arc<AtomicU64>,
}

impl StoryStore {
    /// Create a store with an empty, idle state
    pub fn new() -> Self {
        Self::with_state(StoriesState::default())
    }

    pub fn with_state(initial: StoriesState) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_subscription: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Clone of the current state
    pub fn state(&self) -> StoriesState {
        self.state.read().clone()
    }

    /// Read the state without cloning it
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoriesState) -> R,
    {
        f(&self.state.read())
    }

    /// Apply an action and notify subscribers
    pub fn dispatch(&self, action: StoriesAction) {
        let action_type = action.type_name();
        let _dispatch_guard = self.dispatch_lock.lock();

        let snapshot = {
            let mut state = self.state.write();
            let current = std::mem::take(&mut *state);
            *state = reduce(current, action);
            state.clone()
        };

        tracing::debug!(
            action = action_type,
            items = snapshot.items.len(),
            is_loading = snapshot.is_loading,
            is_error = snapshot.is_error,
            "Dispatched"
        );

        self.notify(&snapshot);
    }

    /// Apply an untyped action, failing on unknown types
    pub fn dispatch_raw(&self, raw: RawAction) -> Result<()> {
        let action = StoriesAction::try_from(raw)?;
        self.dispatch(action);
        Ok(())
    }

    /// Register a callback run after every dispatch
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StoriesState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns false if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    fn notify(&self, state: &StoriesState) {
        let subscribers = self.subscribers.read();
        for (_, subscriber) in subscribers.iter() {
            subscriber(state);
        }
    }
}

impl Default for StoryStore {
    fn default() -> Self {
        Self::new()
    }
}
