//! The store capability consumed by guard and dispatch hooks.

use crate::action::RouterAction;
use crate::state::RouterState;

/// Synchronous store handle injected into hooks at invocation time.
///
/// Guards read committed truth through [`snapshot`](Store::snapshot) and
/// may append follow-up actions through [`dispatch`](Store::dispatch).
/// Actions dispatched while a pipeline is draining are queued behind the
/// in-flight work - they never interleave with it.
pub trait Store<D>: Send + Sync {
    /// Fresh copy of the committed state.
    fn snapshot(&self) -> RouterState<D>;

    /// Append an action to the serialized queue.
    fn dispatch(&self, action: RouterAction<D>);
}
