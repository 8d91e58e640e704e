//! Named routes of the app.
//!
//! `app.rs` mounts one Leptos route per variant; anything else hits the
//! catch-all and goes back to the landing page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    Signup,
    Dashboard,
    Tickets,
}

/// Outcome of matching a URL path against the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    Route(AppRoute),
    /// No named route matched; the catch-all sends these to `target`.
    CatchAll { target: AppRoute },
}

impl AppRoute {
    pub const ALL: [AppRoute; 5] = [Self::Landing, Self::Login, Self::Signup, Self::Dashboard, Self::Tickets];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Dashboard => "dashboard",
            Self::Tickets => "tickets",
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/auth/login",
            Self::Signup => "/auth/signup",
            Self::Dashboard => "/dashboard",
            Self::Tickets => "/tickets",
        }
    }

    /// Protected routes need an active session.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard | Self::Tickets)
    }

    /// Exact match on the path component. Query, fragment, and trailing
    /// slashes are ignored.
    #[must_use]
    pub fn match_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Match `path`, falling back to the catch-all.
    #[must_use]
    pub fn resolve(path: &str) -> Resolved {
        match Self::match_path(path) {
            Some(route) => Resolved::Route(route),
            None => Resolved::CatchAll { target: Self::Landing },
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
