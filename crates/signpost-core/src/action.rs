//! The router's action surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::route::Route;
use crate::url::Url;

/// Discriminated union of everything that flows through the store.
///
/// The three url-carrying variants are pipeline triggers; only
/// `NavigationComplete` changes state, and only the pipeline should emit
/// it. `Effect` carries application side-effect actions produced by
/// `dispatch_on_leave` / `dispatch_on_enter` hooks.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterAction<D> {
    /// External navigation request.
    Navigate { url: Url },
    /// Re-entry after a leave guard redirected.
    InterceptLeaveRedirect { url: Url },
    /// Re-entry after an enter guard redirected.
    InterceptEnterRedirect { url: Url },
    /// The single commit: new url plus its matched hierarchy.
    NavigationComplete { url: Url, routes: Vec<Route<D>> },
    /// Application side-effect payload; a state no-op.
    Effect(Effect),
}

impl<D> RouterAction<D> {
    /// Target url if this action triggers a pipeline run.
    pub fn trigger_url(&self) -> Option<&Url> {
        match self {
            RouterAction::Navigate { url }
            | RouterAction::InterceptLeaveRedirect { url }
            | RouterAction::InterceptEnterRedirect { url } => Some(url),
            _ => None,
        }
    }

    /// Stable discriminant name, used in logs and journals.
    pub fn kind(&self) -> &'static str {
        match self {
            RouterAction::Navigate { .. } => "navigate",
            RouterAction::InterceptLeaveRedirect { .. } => "intercept_leave_redirect",
            RouterAction::InterceptEnterRedirect { .. } => "intercept_enter_redirect",
            RouterAction::NavigationComplete { .. } => "navigation_complete",
            RouterAction::Effect(_) => "effect",
        }
    }
}

/// Application-defined side-effect action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Namespaced effect name, e.g. `"analytics/page_view"`.
    pub name: String,
    /// Arbitrary structured payload.
    pub payload: Value,
}

impl Effect {
    /// Effect with an empty payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Value::Null,
        }
    }

    /// Attach a structured payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_urls() {
        let url = Url::parse("/a");
        let navigate = RouterAction::<()>::Navigate { url: url.clone() };
        assert_eq!(navigate.trigger_url(), Some(&url));

        let commit = RouterAction::<()>::NavigationComplete {
            url: url.clone(),
            routes: vec![],
        };
        assert_eq!(commit.trigger_url(), None);

        let effect = RouterAction::<()>::Effect(Effect::new("analytics/page_view"));
        assert_eq!(effect.trigger_url(), None);
    }

    #[test]
    fn test_effect_serde() {
        let effect = Effect::new("analytics/page_view")
            .with_payload(serde_json::json!({ "path": "/a" }));
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effect);
    }
}
