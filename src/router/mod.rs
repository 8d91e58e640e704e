//! Route table and the pre-navigation guard.

pub mod guard;
pub mod routes;

pub use guard::{GuardDecision, RouteGuard, SessionCheck};
pub use routes::{AppRoute, Resolved};
