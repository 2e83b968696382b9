//! Error types for the navigation pipeline

use std::fmt;

use signpost_core::{ConfigError, RouteId, Url};
use thiserror::Error;

/// Which interception phase a guard ran in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Leave,
    Enter,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Leave => write!(f, "leave"),
            Phase::Enter => write!(f, "enter"),
        }
    }
}

/// Router error types.
///
/// Guard blocks and unmatched paths are ordinary values, not errors; the
/// variants here are the conditions a host must actually react to.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Route table failed validation at construction
    #[error("invalid route configuration: {0}")]
    Config(#[from] ConfigError),

    /// A guard hook failed; the in-flight navigation is dead, state is
    /// left at its last committed value
    #[error("guard fault in {phase} phase for {route_id}: {source}")]
    GuardFault {
        route_id: RouteId,
        phase: Phase,
        #[source]
        source: anyhow::Error,
    },

    /// Mutually redirecting guards exceeded the configured depth
    #[error("redirect limit exceeded after {depth} redirects (last target: {url})")]
    RedirectLimitExceeded { depth: usize, url: Url },

    /// The router service's channel is closed
    #[error("router service is not running")]
    ServiceStopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_fault_display_carries_context() {
        let error = RouterError::GuardFault {
            route_id: RouteId(3),
            phase: Phase::Enter,
            source: anyhow::anyhow!("session expired"),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("enter"));
        assert!(rendered.contains("route#3"));
        assert!(rendered.contains("session expired"));
    }
}
