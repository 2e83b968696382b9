//! Route matcher
//!
//! Deterministic, stateless mapping from a path to a route hierarchy.
//!
//! # Matching Policy
//!
//! - A candidate is a registered config together with its ancestor chain;
//!   the chain's concatenated patterns must consume the path exactly
//! - Literal segments beat parameter segments, compared position by
//!   position from the left
//! - Remaining ties break by registration order of the leaf config
//! - No match for any portion of the path yields an empty hierarchy,
//!   which is a valid state rather than an error

use std::collections::HashMap;

use tracing::debug;

use crate::config::RouteConfig;
use crate::error::ConfigError;
use crate::pattern::Segment;
use crate::route::Route;
use crate::types::{RouteId, RouteParams};
use crate::url::Url;

/// Compiled route registry.
///
/// Built once from the config table; matching never mutates it, so
/// repeated calls with the same path produce structurally identical
/// hierarchies (fresh allocations each call).
pub struct RouteMatcher<D, M> {
    configs: Vec<RouteConfig<D, M>>,
    index: HashMap<RouteId, usize>,
    /// Per config: ancestor chain as indices, outermost first,
    /// ending with the config itself.
    chains: Vec<Vec<usize>>,
}

impl<D, M> RouteMatcher<D, M> {
    /// Compile the registry, validating identities and parent links.
    pub fn new(configs: Vec<RouteConfig<D, M>>) -> Result<Self, ConfigError> {
        let mut index = HashMap::with_capacity(configs.len());
        for (position, config) in configs.iter().enumerate() {
            if index.insert(config.id(), position).is_some() {
                return Err(ConfigError::DuplicateRouteId(config.id()));
            }
            for segment in config.pattern().segments() {
                if let Segment::Param(name) = segment {
                    if name.is_empty() {
                        return Err(ConfigError::EmptyParamName { route: config.id() });
                    }
                }
            }
        }

        let mut chains = Vec::with_capacity(configs.len());
        for (position, config) in configs.iter().enumerate() {
            let mut chain = vec![position];
            let mut cursor = config.parent();
            while let Some(parent_id) = cursor {
                let parent = *index.get(&parent_id).ok_or(ConfigError::UnknownParent {
                    route: config.id(),
                    parent: parent_id,
                })?;
                if chain.contains(&parent) {
                    return Err(ConfigError::ParentCycle(config.id()));
                }
                chain.push(parent);
                cursor = configs[parent].parent();
            }
            chain.reverse();
            chains.push(chain);
        }

        Ok(Self {
            configs,
            index,
            chains,
        })
    }

    /// O(1) identity lookup into the compiled registry.
    pub fn route_config(&self, id: RouteId) -> Option<&RouteConfig<D, M>> {
        self.index.get(&id).map(|&position| &self.configs[position])
    }

    /// Number of registered configs.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl<D: Clone, M> RouteMatcher<D, M> {
    /// Match a url's path. See [`match_path`](Self::match_path).
    pub fn match_url(&self, url: &Url) -> Vec<Route<D>> {
        self.match_path(url.path())
    }

    /// Resolve the full hierarchy for a path, outermost ancestor first.
    pub fn match_path(&self, path: &str) -> Vec<Route<D>> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        // Specificity per consumed segment: literal = 0, param = 1.
        // Lexicographically smaller wins; replace only on strictly
        // smaller so registration order breaks ties.
        let mut best: Option<(Vec<u8>, usize)> = None;
        for (leaf, chain) in self.chains.iter().enumerate() {
            let total: usize = chain
                .iter()
                .map(|&position| self.configs[position].pattern().len())
                .sum();
            if total != segments.len() {
                continue;
            }
            let Some(specificity) = self.chain_specificity(chain, &segments) else {
                continue;
            };
            match &best {
                Some((current, _)) if *current <= specificity => {}
                _ => best = Some((specificity, leaf)),
            }
        }

        let Some((_, leaf)) = best else {
            debug!(path = %path, "no route matched");
            return Vec::new();
        };
        self.build_hierarchy(&self.chains[leaf], &segments)
    }

    fn chain_specificity(&self, chain: &[usize], segments: &[&str]) -> Option<Vec<u8>> {
        let mut specificity = Vec::with_capacity(segments.len());
        let mut cursor = 0;
        for &position in chain {
            for segment in self.configs[position].pattern().segments() {
                if !segment.matches(segments[cursor]) {
                    return None;
                }
                specificity.push(u8::from(segment.is_param()));
                cursor += 1;
            }
        }
        Some(specificity)
    }

    fn build_hierarchy(&self, chain: &[usize], segments: &[&str]) -> Vec<Route<D>> {
        let mut routes = Vec::with_capacity(chain.len());
        let mut cursor = 0;
        for &position in chain {
            let config = &self.configs[position];
            let mut params = RouteParams::new();
            for segment in config.pattern().segments() {
                if let Segment::Param(name) = segment {
                    params.insert(name.clone(), segments[cursor].to_string());
                }
                cursor += 1;
            }
            routes.push(Route::new(config.id(), params, config.data().clone()));
        }
        routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(id: u32, pattern: &str) -> RouteConfig<(), ()> {
        RouteConfig::new(RouteId(id), pattern, (), ())
    }

    fn ids<D>(routes: &[Route<D>]) -> Vec<RouteId> {
        routes.iter().map(Route::route_id).collect()
    }

    #[test]
    fn test_literal_beats_param_at_same_position() {
        let matcher = RouteMatcher::new(vec![
            config(1, "/users/:id"),
            config(2, "/users/new"),
        ])
        .unwrap();

        assert_eq!(ids(&matcher.match_path("/users/new")), vec![RouteId(2)]);
        assert_eq!(ids(&matcher.match_path("/users/42")), vec![RouteId(1)]);
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        let matcher = RouteMatcher::new(vec![
            config(1, "/items/:a"),
            config(2, "/items/:b"),
        ])
        .unwrap();

        let routes = matcher.match_path("/items/7");
        assert_eq!(ids(&routes), vec![RouteId(1)]);
        assert_eq!(routes[0].param("a"), Some("7"));
    }

    #[test]
    fn test_parent_chain_produces_full_hierarchy() {
        let matcher = RouteMatcher::new(vec![
            config(1, "/app"),
            config(2, "traces").with_parent(RouteId(1)),
            config(3, ":trace_id").with_parent(RouteId(2)),
        ])
        .unwrap();

        let routes = matcher.match_path("/app/traces/42");
        assert_eq!(ids(&routes), vec![RouteId(1), RouteId(2), RouteId(3)]);
        assert_eq!(routes[2].param("trace_id"), Some("42"));
        assert!(routes[0].params().is_empty());

        // The child's pattern is only valid below its parent's prefix.
        assert!(matcher.match_path("/traces/42").is_empty());
    }

    #[test]
    fn test_unmatched_path_is_empty_not_error() {
        let matcher = RouteMatcher::new(vec![config(1, "/a")]).unwrap();
        assert!(matcher.match_path("/nope").is_empty());
        assert!(matcher.match_path("/a/too/deep").is_empty());
    }

    #[test]
    fn test_root_pattern_matches_root_path() {
        let matcher = RouteMatcher::new(vec![config(1, "/"), config(2, "/a")]).unwrap();
        assert_eq!(ids(&matcher.match_path("/")), vec![RouteId(1)]);
        assert_eq!(ids(&matcher.match_path("/a")), vec![RouteId(2)]);
    }

    #[test]
    fn test_match_is_deterministic_with_fresh_instances() {
        let matcher = RouteMatcher::new(vec![config(1, "/users/:id")]).unwrap();
        let first = matcher.match_path("/users/42");
        let second = matcher.match_path("/users/42");
        assert_eq!(first, second);
    }

    #[test]
    fn test_route_config_lookup() {
        let matcher = RouteMatcher::new(vec![config(1, "/a"), config(2, "/b")]).unwrap();
        assert_eq!(matcher.route_config(RouteId(2)).unwrap().id(), RouteId(2));
        assert!(matcher.route_config(RouteId(9)).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = RouteMatcher::new(vec![config(1, "/a"), config(1, "/b")]);
        assert!(matches!(result, Err(ConfigError::DuplicateRouteId(RouteId(1)))));
    }

    #[test]
    fn test_rejects_unknown_parent() {
        let result = RouteMatcher::new(vec![config(1, "/a").with_parent(RouteId(9))]);
        assert!(matches!(
            result,
            Err(ConfigError::UnknownParent {
                route: RouteId(1),
                parent: RouteId(9),
            })
        ));
    }

    #[test]
    fn test_rejects_parent_cycle() {
        let result = RouteMatcher::new(vec![
            config(1, "/a").with_parent(RouteId(2)),
            config(2, "/b").with_parent(RouteId(1)),
        ]);
        assert!(matches!(result, Err(ConfigError::ParentCycle(_))));
    }

    #[test]
    fn test_rejects_empty_param_name() {
        let result = RouteMatcher::new(vec![config(1, "/users/:")]);
        assert!(matches!(
            result,
            Err(ConfigError::EmptyParamName { route: RouteId(1) })
        ));
    }
}
