//! Identity and parameter types shared across the router.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, unique identity of a registered route config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub u32);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route#{}", self.0)
    }
}

/// Parameter bindings resolved from a pattern's `:name` segments.
///
/// BTreeMap keeps iteration order deterministic, which matters for
/// structural comparison of matched hierarchies.
pub type RouteParams = BTreeMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_id_display() {
        assert_eq!(RouteId(7).to_string(), "route#7");
    }
}
