//! Pure fold of actions into committed state.

use signpost_core::{RouterAction, RouterState};

/// Fold one action into the state.
///
/// `NavigationComplete` replaces `url` and `routes` together - the one
/// mutation path the state has. Every other action is identity, so this
/// function is total and never fails.
pub fn reduce<D: Clone>(state: &mut RouterState<D>, action: &RouterAction<D>) {
    if let RouterAction::NavigationComplete { url, routes } = action {
        state.url = url.clone();
        state.routes = routes.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signpost_core::{Effect, Route, RouteId, RouteParams, Url};

    #[test]
    fn test_commit_replaces_url_and_routes_together() {
        let mut state = RouterState::<()>::default();
        let routes = vec![Route::new(RouteId(1), RouteParams::new(), ())];
        reduce(
            &mut state,
            &RouterAction::NavigationComplete {
                url: Url::parse("/a"),
                routes: routes.clone(),
            },
        );
        assert_eq!(state.url, Url::parse("/a"));
        assert_eq!(state.routes, routes);
    }

    #[test]
    fn test_non_commit_actions_are_identity() {
        let mut state = RouterState::<()>::default();
        let before = state.clone();

        reduce(&mut state, &RouterAction::Navigate { url: Url::parse("/a") });
        reduce(
            &mut state,
            &RouterAction::InterceptLeaveRedirect { url: Url::parse("/b") },
        );
        reduce(
            &mut state,
            &RouterAction::InterceptEnterRedirect { url: Url::parse("/c") },
        );
        reduce(&mut state, &RouterAction::Effect(Effect::new("noop")));

        assert_eq!(state, before);
    }
}
