//! Signpost Router - Serialized navigation pipeline
//!
//! Maps an opaque url to a hierarchy of matched routes, runs guarded
//! interception on leaving the old hierarchy and entering the new one,
//! supports guard-initiated redirects, and commits state only through a
//! single serialized action pipeline.
//!
//! # Architecture
//!
//! ```text
//! consumer                         RouterStore (serialized queue)
//!    │  dispatch(Navigate)              │
//!    └────────────────────────────────► │ reducer ── fold commit
//!                                       │ reaction ─ leave/enter pipeline
//!                                       │              │ guards may Block
//!                                       │              │ or Redirect
//!                                       │              ▼
//!                                       │ emits: leave actions,
//!                                       │        NavigationComplete,
//!                                       │        enter actions
//!                                       ▼
//!                                  RouterState { url, routes }
//! ```
//!
//! # Guarantees
//!
//! - Triggers are handled strictly in dispatch order; a trigger's entire
//!   pipeline (redirect sub-loop included) finishes before the next one
//! - Guards read committed truth: every pipeline pass re-snapshots state
//! - A blocked or faulted navigation leaves state untouched; the commit
//!   action only exists once both phases have fully succeeded
//! - Redirect cycles terminate with
//!   [`RouterError::RedirectLimitExceeded`]
//!
//! # Example
//!
//! ```rust,ignore
//! use signpost_core::{RouteConfig, RouteId};
//! use signpost_router::{Router, RouterConfig};
//!
//! let router = Router::new(
//!     "devtools",
//!     RouterConfig::new(vec![
//!         RouteConfig::new(RouteId(1), "/traces", (), "Traces"),
//!         RouteConfig::new(RouteId(2), ":trace_id", (), "Trace")
//!             .with_parent(RouteId(1)),
//!     ])
//!     .with_initial_url("/traces"),
//! )?;
//!
//! router.dispatch(router.navigate("/traces/42"))?;
//! assert_eq!(router.url().path(), "/traces/42");
//! ```

// Core modules
mod error;
mod reducer;
mod store;

// Pipeline
mod reaction;

// Facade and async driver
mod router;
mod service;

// Action constructors and selectors
pub mod actions;
pub mod selectors;

// Re-exports: Error types
pub use error::{Phase, RouterError};

// Re-exports: Engine
pub use reducer::reduce;
pub use store::RouterStore;

// Re-exports: Facade and service
pub use router::{Router, RouterConfig, DEFAULT_MAX_REDIRECT_DEPTH};
pub use service::{RouterHandle, RouterService};

// Re-exports: Core data model, for convenience
pub use signpost_core::{
    ConfigError, Effect, GuardDecision, GuardResult, Route, RouteConfig, RouteId, RouteMatcher,
    RouteParams, RouterAction, RouterState, Store, Url,
};
