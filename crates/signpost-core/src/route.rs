//! Matched route instances.

use crate::types::{RouteId, RouteParams};

/// A resolved match of a [`RouteConfig`](crate::RouteConfig) for a
/// specific url.
///
/// Instances are produced fresh by every matcher call and never mutated
/// afterward. `params` holds the bindings of this config's own pattern;
/// ancestor bindings live on the ancestor routes of the same hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<D> {
    route_id: RouteId,
    params: RouteParams,
    data: D,
}

impl<D> Route<D> {
    /// Create a match instance. Normally only the matcher does this.
    pub fn new(route_id: RouteId, params: RouteParams, data: D) -> Self {
        Self {
            route_id,
            params,
            data,
        }
    }

    /// Identity of the originating config.
    pub fn route_id(&self) -> RouteId {
        self.route_id
    }

    /// All parameter bindings of this route's own pattern.
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Single parameter lookup.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Render-time payload carried over from the config.
    pub fn data(&self) -> &D {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_lookup() {
        let mut params = RouteParams::new();
        params.insert("id".to_string(), "42".to_string());
        let route = Route::new(RouteId(1), params, ());
        assert_eq!(route.param("id"), Some("42"));
        assert_eq!(route.param("missing"), None);
    }
}
