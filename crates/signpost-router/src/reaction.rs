//! Navigation state machine
//!
//! Consumes trigger actions off the store's serialized queue and runs the
//! leave/enter interception pipeline against a candidate url.
//!
//! # Pipeline
//!
//! ```text
//! trigger { url }
//!     │
//!     ▼ (per pass: fresh snapshot of committed state)
//! leave phase   intercept_leave over current hierarchy
//!     │             Block    -> silent abort, nothing emitted
//!     │             Redirect -> new pass with the redirect url
//!     ▼
//! enter phase   match candidate, intercept_enter over new hierarchy
//!     │             same Block / Redirect contract
//!     ▼
//! commit        leave actions, NavigationComplete, enter actions
//! ```
//!
//! The redirect sub-loop runs as a bounded loop inside one handler
//! invocation, so a trigger's redirects can never interleave with an
//! independently queued trigger. Every pass re-reads committed state:
//! guards always see committed truth, never a discarded candidate.
//!
//! The commit emissions are returned to the store's drain, which applies
//! them ahead of anything a hook dispatched while the pipeline was in
//! flight.

use std::sync::Arc;

use signpost_core::{
    DispatchHook, GuardDecision, InterceptHook, Route, RouteMatcher, RouterAction, Store, Url,
};
use tracing::{debug, info};

use crate::error::{Phase, RouterError};
use crate::store::RouterStore;

enum PhaseOutcome<D> {
    /// Phase passed; ordered side-effect actions to emit on commit.
    Continue(Vec<RouterAction<D>>),
    /// A guard blocked; abort the whole navigation silently.
    Blocked,
    /// A guard retargeted the navigation.
    Redirected(Url),
}

/// The reaction driving one router slice.
pub(crate) struct Reaction<D, M> {
    matcher: Arc<RouteMatcher<D, M>>,
    max_redirect_depth: usize,
}

impl<D, M> Reaction<D, M>
where
    D: Clone + Send + Sync + 'static,
    M: Send + Sync + 'static,
{
    pub(crate) fn new(matcher: Arc<RouteMatcher<D, M>>, max_redirect_depth: usize) -> Self {
        Self {
            matcher,
            max_redirect_depth,
        }
    }

    /// Handle one action off the queue. Returns the ordered emissions of
    /// the pipeline; non-trigger actions and blocked navigations produce
    /// none.
    pub(crate) fn react(
        &self,
        store: &RouterStore<D, M>,
        action: &RouterAction<D>,
    ) -> Result<Vec<RouterAction<D>>, RouterError> {
        let Some(url) = action.trigger_url() else {
            return Ok(Vec::new());
        };
        self.run_pipeline(store, action.kind(), url.clone())
    }

    fn run_pipeline(
        &self,
        store: &RouterStore<D, M>,
        mut trigger: &'static str,
        mut candidate: Url,
    ) -> Result<Vec<RouterAction<D>>, RouterError> {
        let mut depth = 0usize;
        loop {
            debug!(
                router = %store.name(),
                trigger,
                url = %candidate,
                depth,
                "navigation pass started"
            );
            let snapshot = store.state_snapshot();
            let prev_url = snapshot.url;
            let prev_routes = snapshot.routes;

            let leave_actions = match self.run_phase(
                store,
                Phase::Leave,
                &prev_url,
                &prev_routes,
                &candidate,
            )? {
                PhaseOutcome::Continue(actions) => actions,
                PhaseOutcome::Blocked => return Ok(Vec::new()),
                PhaseOutcome::Redirected(next) => {
                    depth = self.bump_depth(depth, &next)?;
                    trigger = "intercept_leave_redirect";
                    candidate = next;
                    continue;
                }
            };

            let next_routes = self.matcher.match_url(&candidate);
            let enter_actions = match self.run_phase(
                store,
                Phase::Enter,
                &prev_url,
                &next_routes,
                &candidate,
            )? {
                PhaseOutcome::Continue(actions) => actions,
                PhaseOutcome::Blocked => return Ok(Vec::new()),
                PhaseOutcome::Redirected(next) => {
                    depth = self.bump_depth(depth, &next)?;
                    trigger = "intercept_enter_redirect";
                    candidate = next;
                    continue;
                }
            };

            // Commit: leave actions, then the single commit, then enter
            // actions - the drain applies them in this order.
            info!(
                router = %store.name(),
                url = %candidate,
                routes = next_routes.len(),
                leave_actions = leave_actions.len(),
                enter_actions = enter_actions.len(),
                "navigation committed"
            );
            let mut emissions = leave_actions;
            emissions.push(RouterAction::NavigationComplete {
                url: candidate,
                routes: next_routes,
            });
            emissions.extend(enter_actions);
            return Ok(emissions);
        }
    }

    /// Run one interception phase over a hierarchy. Dispatch-hook actions
    /// are buffered and only emitted if the whole pipeline commits; a
    /// block or redirect discards them.
    fn run_phase(
        &self,
        store: &RouterStore<D, M>,
        phase: Phase,
        prev_url: &Url,
        routes: &[Route<D>],
        candidate: &Url,
    ) -> Result<PhaseOutcome<D>, RouterError> {
        let mut actions = Vec::new();
        for route in routes {
            let Some(config) = self.matcher.route_config(route.route_id()) else {
                continue;
            };
            let intercept = match phase {
                Phase::Leave => config.intercept_leave(),
                Phase::Enter => config.intercept_enter(),
            };
            if let Some(hook) = intercept {
                match invoke_guard(hook, store, prev_url, route, phase)? {
                    GuardDecision::Allow => {}
                    GuardDecision::Block => {
                        debug!(
                            router = %store.name(),
                            route = %route.route_id(),
                            phase = %phase,
                            url = %candidate,
                            "navigation blocked"
                        );
                        return Ok(PhaseOutcome::Blocked);
                    }
                    GuardDecision::Redirect(next) => {
                        debug!(
                            router = %store.name(),
                            route = %route.route_id(),
                            phase = %phase,
                            from = %candidate,
                            to = %next,
                            "guard redirected"
                        );
                        return Ok(PhaseOutcome::Redirected(next));
                    }
                }
            }
            let dispatch = match phase {
                Phase::Leave => config.dispatch_on_leave(),
                Phase::Enter => config.dispatch_on_enter(),
            };
            if let Some(hook) = dispatch {
                actions.push(invoke_dispatch(hook, store, prev_url, route));
            }
        }
        Ok(PhaseOutcome::Continue(actions))
    }

    fn bump_depth(&self, depth: usize, target: &Url) -> Result<usize, RouterError> {
        let depth = depth + 1;
        if depth > self.max_redirect_depth {
            return Err(RouterError::RedirectLimitExceeded {
                depth,
                url: target.clone(),
            });
        }
        Ok(depth)
    }
}

fn invoke_guard<D, M>(
    hook: &InterceptHook<D>,
    store: &RouterStore<D, M>,
    prev_url: &Url,
    route: &Route<D>,
    phase: Phase,
) -> Result<GuardDecision, RouterError>
where
    D: Clone + Send + Sync + 'static,
    M: Send + Sync + 'static,
{
    hook(store as &dyn Store<D>, prev_url, route).map_err(|source| RouterError::GuardFault {
        route_id: route.route_id(),
        phase,
        source,
    })
}

fn invoke_dispatch<D, M>(
    hook: &DispatchHook<D>,
    store: &RouterStore<D, M>,
    prev_url: &Url,
    route: &Route<D>,
) -> RouterAction<D>
where
    D: Clone + Send + Sync + 'static,
    M: Send + Sync + 'static,
{
    hook(store as &dyn Store<D>, prev_url, route)
}
