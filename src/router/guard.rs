//! Pre-navigation check for protected routes.
//!
//! Synchronous and local: the only input is whether a session token exists.
//! No expiry, no server round-trip.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{AppRoute, Resolved};

/// Anything that can answer "is there an active session?".
pub trait SessionCheck {
    fn is_authenticated(&self) -> bool;
}

impl SessionCheck for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

impl<C: SessionCheck + ?Sized> SessionCheck for &C {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed(AppRoute),
    Redirect(AppRoute),
}

impl GuardDecision {
    /// Route the user ends up on.
    #[must_use]
    pub fn route(self) -> AppRoute {
        match self {
            Self::Proceed(route) | Self::Redirect(route) => route,
        }
    }
}

pub struct RouteGuard<'a, C: ?Sized> {
    session: &'a C,
}

impl<'a, C: SessionCheck + ?Sized> RouteGuard<'a, C> {
    pub fn new(session: &'a C) -> Self {
        Self { session }
    }

    /// Decide whether navigation to `target` may proceed.
    ///
    /// Protected routes redirect to login when no session exists. The session
    /// is consulted on every call.
    #[must_use]
    pub fn check(&self, target: AppRoute) -> GuardDecision {
        if target.requires_auth() && !self.session.is_authenticated() {
            log::debug!("guard: {target} requires a session, redirecting to login");
            GuardDecision::Redirect(AppRoute::Login)
        } else {
            GuardDecision::Proceed(target)
        }
    }

    /// Resolve a raw path, then apply [`RouteGuard::check`]. Unknown paths
    /// redirect to the catch-all target.
    #[must_use]
    pub fn navigate(&self, path: &str) -> GuardDecision {
        match AppRoute::resolve(path) {
            Resolved::Route(route) => self.check(route),
            Resolved::CatchAll { target } => GuardDecision::Redirect(self.check(target).route()),
        }
    }
}
