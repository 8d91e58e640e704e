//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical guard behavior: ask the session store on
//! every navigation, never a cached signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::router::{AppRoute, GuardDecision, RouteGuard};
use crate::session;

/// Run the route guard for `route` against the app's session store.
pub fn check_route(route: AppRoute) -> GuardDecision {
    RouteGuard::new(&session::open()).check(route)
}
