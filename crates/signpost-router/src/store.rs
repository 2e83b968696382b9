//! Serialized action store.
//!
//! # Responsibilities
//! - Own the committed [`RouterState`]
//! - Serialize action processing through a FIFO queue with a single
//!   drainer: one trigger's entire pipeline finishes before the next
//!   trigger starts
//! - Fold each action through the reducer, notify observers, then hand
//!   it to the reaction
//!
//! The queue is the concurrency-control mechanism: re-entrant dispatches
//! from guard hooks and observers enqueue behind the in-flight work
//! instead of interleaving with it. The pipeline's own emissions are
//! applied ahead of the queue, so a commit always lands before anything
//! a hook dispatched while that pipeline was still running.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use signpost_core::{RouterAction, RouterState, Store};
use tracing::{debug, error, warn};

use crate::reaction::Reaction;
use crate::reducer::reduce;

type ActionObserver<D> = Arc<dyn Fn(&RouterAction<D>) + Send + Sync>;

/// The store driving one router slice.
pub struct RouterStore<D, M> {
    name: String,
    state: RwLock<RouterState<D>>,
    queue: Mutex<VecDeque<RouterAction<D>>>,
    draining: AtomicBool,
    observers: RwLock<Vec<ActionObserver<D>>>,
    reaction: Reaction<D, M>,
}

impl<D, M> RouterStore<D, M>
where
    D: Clone + Send + Sync + 'static,
    M: Send + Sync + 'static,
{
    pub(crate) fn new(name: String, reaction: Reaction<D, M>) -> Self {
        Self {
            name,
            state: RwLock::new(RouterState::default()),
            queue: Mutex::new(VecDeque::new()),
            draining: AtomicBool::new(false),
            observers: RwLock::new(Vec::new()),
            reaction,
        }
    }

    /// Slice name, used as the structured-log field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Synchronous snapshot read through a selector.
    pub fn get<T>(&self, selector: impl FnOnce(&RouterState<D>) -> T) -> T {
        selector(&self.state.read())
    }

    /// Fresh copy of the committed state.
    pub fn state_snapshot(&self) -> RouterState<D> {
        self.state.read().clone()
    }

    /// Register an observer called for every applied action, in emission
    /// order, after the reducer has folded it.
    pub fn on_action(&self, observer: impl Fn(&RouterAction<D>) + Send + Sync + 'static) {
        self.observers.write().push(Arc::new(observer));
    }

    /// Dispatch an action into the serialized queue.
    ///
    /// If no drain is in progress the caller becomes the drainer and
    /// processes the queue to exhaustion; the returned error is the first
    /// pipeline fault encountered during that drain. If another caller is
    /// already draining, the action is queued behind its work and `Ok` is
    /// returned - any fault it causes surfaces to that drainer (and in
    /// the log).
    pub fn dispatch(&self, action: RouterAction<D>) -> Result<(), crate::RouterError> {
        debug!(router = %self.name, action = action.kind(), "action dispatched");
        self.queue.lock().push_back(action);
        if self.draining.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.drain()
    }

    fn drain(&self) -> Result<(), crate::RouterError> {
        let mut first_error = None;
        // Pipeline emissions take priority over the shared queue: a
        // trigger's commit is applied before any action a hook
        // dispatched while that trigger's pipeline was in flight.
        let mut emissions: VecDeque<RouterAction<D>> = VecDeque::new();
        loop {
            // The queue lock is scoped to the pop: the reaction's hooks
            // may dispatch re-entrantly on this thread.
            let popped = match emissions.pop_front() {
                Some(action) => Some(action),
                None => self.queue.lock().pop_front(),
            };
            let Some(action) = popped else {
                self.draining.store(false, Ordering::Release);
                // An action may have been queued between the last pop and
                // the flag clear; re-acquire unless someone else already
                // did.
                if self.queue.lock().is_empty() || self.draining.swap(true, Ordering::AcqRel) {
                    break;
                }
                continue;
            };
            self.apply(&action);
            match self.reaction.react(self, &action) {
                Ok(produced) => emissions.extend(produced),
                Err(fault) => {
                    error!(
                        router = %self.name,
                        action = action.kind(),
                        error = %fault,
                        "navigation pipeline failed"
                    );
                    first_error.get_or_insert(fault);
                }
            }
        }
        match first_error {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    fn apply(&self, action: &RouterAction<D>) {
        {
            let mut state = self.state.write();
            reduce(&mut state, action);
        }
        // Snapshot the list so an observer can register further
        // observers re-entrantly.
        let observers: Vec<ActionObserver<D>> = self.observers.read().clone();
        for observer in &observers {
            observer(action);
        }
    }
}

impl<D, M> Store<D> for RouterStore<D, M>
where
    D: Clone + Send + Sync + 'static,
    M: Send + Sync + 'static,
{
    fn snapshot(&self) -> RouterState<D> {
        self.state_snapshot()
    }

    fn dispatch(&self, action: RouterAction<D>) {
        if let Err(fault) = RouterStore::dispatch(self, action) {
            warn!(router = %self.name, error = %fault, "hook-dispatched action failed");
        }
    }
}
