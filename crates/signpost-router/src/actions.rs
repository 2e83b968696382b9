//! Action constructors for the router slice.
//!
//! `NavigationComplete` intentionally has no constructor here: the commit
//! is only ever emitted by the pipeline itself.

use signpost_core::{Effect, RouterAction, Url};

/// Request a navigation. Pure value; nothing happens until it is
/// dispatched into the store.
pub fn navigate<D>(url: impl Into<Url>) -> RouterAction<D> {
    RouterAction::Navigate { url: url.into() }
}

/// Trigger a pipeline pass the way a leave-guard redirect does.
pub fn intercept_leave_redirect<D>(url: impl Into<Url>) -> RouterAction<D> {
    RouterAction::InterceptLeaveRedirect { url: url.into() }
}

/// Trigger a pipeline pass the way an enter-guard redirect does.
pub fn intercept_enter_redirect<D>(url: impl Into<Url>) -> RouterAction<D> {
    RouterAction::InterceptEnterRedirect { url: url.into() }
}

/// Wrap an application side-effect for the action stream.
pub fn effect<D>(effect: Effect) -> RouterAction<D> {
    RouterAction::Effect(effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_is_a_pure_value() {
        let action: RouterAction<()> = navigate("/users/42");
        assert_eq!(action.kind(), "navigate");
        assert_eq!(action.trigger_url(), Some(&Url::parse("/users/42")));
    }
}
