//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the root component. Pages
//! refresh it after login, signup, and logout so headers re-render. The
//! route guard does not read it; it asks the session store directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::auth::{AuthProvider, User};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;

/// Snapshot of the persisted session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
}

impl AuthState {
    /// Read the current session from `store`.
    pub fn from_store<S, P>(store: &SessionStore<S, P>) -> Self
    where
        S: KeyValueStore,
        P: AuthProvider,
    {
        Self { user: store.current_user(), authenticated: store.is_authenticated() }
    }

    /// Name to greet the user with; falls back to the email, then "there".
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.user {
            Some(user) if !user.name.trim().is_empty() => user.name.clone(),
            Some(user) if !user.email.trim().is_empty() => user.email.clone(),
            _ => "there".to_owned(),
        }
    }
}
