//! Static route registrations.

use std::fmt;
use std::sync::Arc;

use crate::action::RouterAction;
use crate::pattern::PathPattern;
use crate::route::Route;
use crate::store::Store;
use crate::types::RouteId;
use crate::url::Url;

/// What a guard hook decided about an in-flight navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Continue with the next route in the phase.
    Allow,
    /// Abort the whole navigation silently; state stays put.
    Block,
    /// Retarget the navigation and re-run the pipeline from the top.
    Redirect(Url),
}

/// Guard hooks report application failures as `anyhow` errors; the
/// pipeline wraps them with route and phase context.
pub type GuardResult = Result<GuardDecision, anyhow::Error>;

/// Interception guard invoked on leaving or entering a route.
pub type InterceptHook<D> =
    Arc<dyn Fn(&dyn Store<D>, &Url, &Route<D>) -> GuardResult + Send + Sync>;

/// Side-effect producer invoked during a phase; its action is emitted
/// only if the whole pipeline commits.
pub type DispatchHook<D> =
    Arc<dyn Fn(&dyn Store<D>, &Url, &Route<D>) -> RouterAction<D> + Send + Sync>;

/// Static, immutable description of one route.
///
/// Created once at router construction and owned by the matcher registry.
/// `data` is the render-time payload cloned into every match instance;
/// `metadata` stays on the config for lookup-style consumers
/// (breadcrumbs, page titles).
pub struct RouteConfig<D, M> {
    id: RouteId,
    pattern: PathPattern,
    parent: Option<RouteId>,
    data: D,
    metadata: M,
    intercept_leave: Option<InterceptHook<D>>,
    intercept_enter: Option<InterceptHook<D>>,
    dispatch_on_leave: Option<DispatchHook<D>>,
    dispatch_on_enter: Option<DispatchHook<D>>,
}

impl<D, M> RouteConfig<D, M> {
    /// Register a route under `id` with a raw pattern such as
    /// `/users/:id`.
    pub fn new(id: RouteId, pattern: &str, data: D, metadata: M) -> Self {
        Self {
            id,
            pattern: PathPattern::compile(pattern),
            parent: None,
            data,
            metadata,
            intercept_leave: None,
            intercept_enter: None,
            dispatch_on_leave: None,
            dispatch_on_enter: None,
        }
    }

    /// Attach this route below a parent; the parent's matched prefix is
    /// the only context this route matches in.
    pub fn with_parent(mut self, parent: RouteId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Guard consulted when navigating away from this route.
    pub fn with_intercept_leave(
        mut self,
        hook: impl Fn(&dyn Store<D>, &Url, &Route<D>) -> GuardResult + Send + Sync + 'static,
    ) -> Self {
        self.intercept_leave = Some(Arc::new(hook));
        self
    }

    /// Guard consulted when navigating onto this route.
    pub fn with_intercept_enter(
        mut self,
        hook: impl Fn(&dyn Store<D>, &Url, &Route<D>) -> GuardResult + Send + Sync + 'static,
    ) -> Self {
        self.intercept_enter = Some(Arc::new(hook));
        self
    }

    /// Side-effect action emitted (before the commit) when this route is
    /// left by a successful navigation.
    pub fn with_dispatch_on_leave(
        mut self,
        hook: impl Fn(&dyn Store<D>, &Url, &Route<D>) -> RouterAction<D> + Send + Sync + 'static,
    ) -> Self {
        self.dispatch_on_leave = Some(Arc::new(hook));
        self
    }

    /// Side-effect action emitted (after the commit) when this route is
    /// entered by a successful navigation.
    pub fn with_dispatch_on_enter(
        mut self,
        hook: impl Fn(&dyn Store<D>, &Url, &Route<D>) -> RouterAction<D> + Send + Sync + 'static,
    ) -> Self {
        self.dispatch_on_enter = Some(Arc::new(hook));
        self
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn parent(&self) -> Option<RouteId> {
        self.parent
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub fn intercept_leave(&self) -> Option<&InterceptHook<D>> {
        self.intercept_leave.as_ref()
    }

    pub fn intercept_enter(&self) -> Option<&InterceptHook<D>> {
        self.intercept_enter.as_ref()
    }

    pub fn dispatch_on_leave(&self) -> Option<&DispatchHook<D>> {
        self.dispatch_on_leave.as_ref()
    }

    pub fn dispatch_on_enter(&self) -> Option<&DispatchHook<D>> {
        self.dispatch_on_enter.as_ref()
    }
}

impl<D: fmt::Debug, M: fmt::Debug> fmt::Debug for RouteConfig<D, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteConfig")
            .field("id", &self.id)
            .field("pattern", &self.pattern.to_string())
            .field("parent", &self.parent)
            .field("data", &self.data)
            .field("metadata", &self.metadata)
            .field("intercept_leave", &self.intercept_leave.is_some())
            .field("intercept_enter", &self.intercept_enter.is_some())
            .field("dispatch_on_leave", &self.dispatch_on_leave.is_some())
            .field("dispatch_on_enter", &self.dispatch_on_enter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_surface() {
        let config = RouteConfig::new(RouteId(1), "/users/:id", (), "Users")
            .with_parent(RouteId(0))
            .with_intercept_enter(|_, _, _| Ok(GuardDecision::Allow));

        assert_eq!(config.id(), RouteId(1));
        assert_eq!(config.parent(), Some(RouteId(0)));
        assert_eq!(config.pattern().len(), 2);
        assert_eq!(*config.metadata(), "Users");
        assert!(config.intercept_enter().is_some());
        assert!(config.intercept_leave().is_none());
    }
}
