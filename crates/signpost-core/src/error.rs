//! Error types for the core data model

use thiserror::Error;

use crate::types::RouteId;

/// Route table validation errors, raised at matcher construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two configs registered under the same id
    #[error("duplicate route id: {0}")]
    DuplicateRouteId(RouteId),

    /// A config references a parent that is not in the table
    #[error("{route} references unknown parent {parent}")]
    UnknownParent { route: RouteId, parent: RouteId },

    /// Parent links form a cycle
    #[error("parent cycle involving {0}")]
    ParentCycle(RouteId),

    /// A pattern declares `:` with no parameter name
    #[error("{route} declares a parameter segment with no name")]
    EmptyParamName { route: RouteId },
}
