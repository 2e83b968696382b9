//! Pure selectors over committed router state.

use signpost_core::{Route, RouterState, Url};

/// Currently committed url.
pub fn url<D>(state: &RouterState<D>) -> &Url {
    &state.url
}

/// Currently committed hierarchy, outermost ancestor first.
pub fn routes<D>(state: &RouterState<D>) -> &[Route<D>] {
    &state.routes
}

/// The whole committed state.
pub fn state<D>(state: &RouterState<D>) -> &RouterState<D> {
    state
}
