//! Router construction and public façade.

use std::sync::Arc;

use signpost_core::{
    Route, RouteConfig, RouteId, RouteMatcher, RouterAction, RouterState, Url,
};
use tracing::info;

use crate::actions;
use crate::error::RouterError;
use crate::reaction::Reaction;
use crate::store::RouterStore;

/// Default bound on guard-initiated redirects per trigger.
pub const DEFAULT_MAX_REDIRECT_DEPTH: usize = 16;

/// Construction-time configuration of a router slice.
pub struct RouterConfig<D, M> {
    /// Static route table, in registration order.
    pub routes: Vec<RouteConfig<D, M>>,
    /// Url the initial hierarchy is primed from.
    pub initial_url: Url,
    /// Bound on guard-initiated redirects per trigger; exceeding it fails
    /// the pipeline instead of looping forever.
    pub max_redirect_depth: usize,
}

impl<D, M> RouterConfig<D, M> {
    pub fn new(routes: Vec<RouteConfig<D, M>>) -> Self {
        Self {
            routes,
            ..Self::default()
        }
    }

    pub fn with_initial_url(mut self, url: impl Into<Url>) -> Self {
        self.initial_url = url.into();
        self
    }

    pub fn with_max_redirect_depth(mut self, depth: usize) -> Self {
        self.max_redirect_depth = depth;
        self
    }
}

impl<D, M> Default for RouterConfig<D, M> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            initial_url: Url::root(),
            max_redirect_depth: DEFAULT_MAX_REDIRECT_DEPTH,
        }
    }
}

/// Public façade over one router slice.
///
/// Cheap to clone; all clones share the same store. State changes flow
/// exclusively through the reducer folding the pipeline's commit action -
/// the façade itself only reads committed state and produces actions.
pub struct Router<D, M> {
    store: Arc<RouterStore<D, M>>,
    matcher: Arc<RouteMatcher<D, M>>,
}

impl<D, M> Router<D, M>
where
    D: Clone + Send + Sync + 'static,
    M: Send + Sync + 'static,
{
    /// Build the slice and prime the initial hierarchy with a single
    /// synthesized `Navigate`.
    pub fn new(name: impl Into<String>, config: RouterConfig<D, M>) -> Result<Self, RouterError> {
        let name = name.into();
        let matcher = Arc::new(RouteMatcher::new(config.routes)?);
        let reaction = Reaction::new(Arc::clone(&matcher), config.max_redirect_depth);
        let store = Arc::new(RouterStore::new(name.clone(), reaction));
        info!(
            router = %name,
            routes = matcher.len(),
            initial_url = %config.initial_url,
            "router created"
        );

        let router = Self { store, matcher };
        router.dispatch(actions::navigate(config.initial_url))?;
        Ok(router)
    }

    /// Produce a `Navigate` action. Pure; no side effects, no state
    /// change until the action is dispatched.
    pub fn navigate(&self, url: impl Into<Url>) -> RouterAction<D> {
        actions::navigate(url)
    }

    /// Dispatch an action into the serialized store queue.
    pub fn dispatch(&self, action: RouterAction<D>) -> Result<(), RouterError> {
        self.store.dispatch(action)
    }

    /// Committed url.
    pub fn url(&self) -> Url {
        self.store.get(|state| state.url.clone())
    }

    /// Committed hierarchy, outermost ancestor first.
    pub fn routes(&self) -> Vec<Route<D>> {
        self.store.get(|state| state.routes.clone())
    }

    /// Copy of the whole committed state.
    pub fn state(&self) -> RouterState<D> {
        self.store.state_snapshot()
    }

    /// Read-only config lookup for metadata consumers (breadcrumbs, page
    /// titles) - the matcher itself stays private.
    pub fn route_config(&self, id: RouteId) -> Option<&RouteConfig<D, M>> {
        self.matcher.route_config(id)
    }

    /// The underlying store, for observers and hook-level consumers.
    pub fn store(&self) -> &Arc<RouterStore<D, M>> {
        &self.store
    }
}

impl<D, M> Clone for Router<D, M> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            matcher: Arc::clone(&self.matcher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_primes_initial_hierarchy() {
        let config = RouterConfig::new(vec![RouteConfig::new(RouteId(1), "/a", (), ())])
            .with_initial_url("/a");
        let router = Router::new("test", config).unwrap();
        assert_eq!(router.url(), Url::parse("/a"));
        assert_eq!(router.routes().len(), 1);
    }

    #[test]
    fn test_route_config_lookup_via_facade() {
        let config = RouterConfig::new(vec![RouteConfig::new(RouteId(1), "/a", (), "Home")]);
        let router = Router::new("test", config).unwrap();
        assert_eq!(*router.route_config(RouteId(1)).unwrap().metadata(), "Home");
        assert!(router.route_config(RouteId(9)).is_none());
    }

    #[test]
    fn test_invalid_table_is_rejected_at_construction() {
        let config = RouterConfig::new(vec![
            RouteConfig::new(RouteId(1), "/a", (), ()),
            RouteConfig::new(RouteId(1), "/b", (), ()),
        ]);
        assert!(matches!(
            Router::new("test", config),
            Err(RouterError::Config(_))
        ));
    }
}
