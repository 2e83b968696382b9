//! Signpost Core - Data model and route matcher
//!
//! The pure half of the navigation router: urls, route registrations,
//! matched hierarchies, the action union, and the matcher that resolves
//! a path into a hierarchy. No locks, no runtime - the serialized
//! pipeline lives in `signpost-router`.
//!
//! # Architecture
//!
//! ```text
//! Url ("/app/traces/42")
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │      RouteMatcher       │  Which configs consume the path?
//! │ (registry + hierarchy)  │
//! └───────────┬─────────────┘
//!             │
//!             ▼
//!   Vec<Route>  ──  outermost ancestor ... leaf
//! ```
//!
//! # Matching Semantics
//!
//! - Patterns are `/`-separated segments: literals or `:name` parameters
//! - Literal segments beat parameter segments position by position;
//!   remaining ties break by registration order
//! - A child config only matches below its parent's matched prefix
//! - An unmatched path is an empty hierarchy, not an error

mod action;
mod config;
mod error;
mod matcher;
mod pattern;
mod route;
mod state;
mod store;
mod types;
mod url;

// Re-exports: Errors
pub use error::ConfigError;

// Re-exports: Core types
pub use types::{RouteId, RouteParams};
pub use url::Url;

// Re-exports: Registrations and matches
pub use config::{DispatchHook, GuardDecision, GuardResult, InterceptHook, RouteConfig};
pub use pattern::{PathPattern, Segment};
pub use route::Route;

// Re-exports: State and actions
pub use action::{Effect, RouterAction};
pub use state::RouterState;
pub use store::Store;

// Re-exports: Matcher
pub use matcher::RouteMatcher;
