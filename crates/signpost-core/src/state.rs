//! Committed router state.

use crate::route::Route;
use crate::types::RouteId;
use crate::url::Url;

/// The committed navigation state: current url plus the matched hierarchy.
///
/// `routes` is ordered from the outermost matched ancestor to the
/// innermost leaf, and is always exactly what the matcher would produce
/// for `url`. The two fields only ever change together, through the
/// reducer folding a commit action.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterState<D> {
    pub url: Url,
    pub routes: Vec<Route<D>>,
}

impl<D> RouterState<D> {
    /// The innermost (leaf) match, if the current url matched at all.
    pub fn active_route(&self) -> Option<&Route<D>> {
        self.routes.last()
    }

    /// Whether a config participates in the current hierarchy.
    pub fn contains(&self, id: RouteId) -> bool {
        self.routes.iter().any(|route| route.route_id() == id)
    }

    /// An empty hierarchy is a valid "unmatched" state, not an error.
    pub fn is_matched(&self) -> bool {
        !self.routes.is_empty()
    }
}

impl<D> Default for RouterState<D> {
    fn default() -> Self {
        Self {
            url: Url::root(),
            routes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RouteParams;

    #[test]
    fn test_default_state_is_unmatched_root() {
        let state = RouterState::<()>::default();
        assert_eq!(state.url, Url::root());
        assert!(!state.is_matched());
        assert!(state.active_route().is_none());
    }

    #[test]
    fn test_active_route_is_leaf() {
        let state = RouterState {
            url: Url::parse("/a/b"),
            routes: vec![
                Route::new(RouteId(1), RouteParams::new(), ()),
                Route::new(RouteId(2), RouteParams::new(), ()),
            ],
        };
        assert_eq!(state.active_route().unwrap().route_id(), RouteId(2));
        assert!(state.contains(RouteId(1)));
        assert!(!state.contains(RouteId(3)));
    }
}
