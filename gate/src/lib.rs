//! Access-control gate for routed pages.
//!
//! This crate owns the navigation decision used by the `client` crate: given
//! a route's declared requirements and the current [`Session`], a gate either
//! shows a loading placeholder, redirects, or renders the page. It has no UI
//! dependency so the decision procedure can be exercised without mounting
//! anything.
//!
//! ```text
//! identity provider ─┐
//! profile lookup ────┼─> SessionFeed ──> GateController ──> Navigator
//! location changes ──┘                      │
//!                                           └─> Action (Loading | Redirect | Render)
//! ```

pub mod decide;
pub mod feed;
pub mod machine;
pub mod routes;
pub mod session;

pub use decide::{Action, GatePaths, RouteRequirements, decide};
pub use feed::{GateController, SessionFeed, Subscription};
pub use machine::{Gate, GateState, Navigator, Outcome};
pub use routes::{Access, RouteSpec, RouteTable};
pub use session::{Identity, Session};

/// Error returned when gate configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// A gate path was empty or did not start with `/`.
    #[error("gate path must be absolute: {0:?}")]
    RelativePath(String),
    /// Two of login/register/dashboard resolve to the same path.
    #[error("gate paths must be distinct: {0:?} is used twice")]
    DuplicatePath(String),
    /// A route pattern could not be parsed.
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
}
