//! Login, signup, and logout over an injected key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these operations from form handlers; the route guard only asks
//! [`SessionStore::is_authenticated`]. Everything runs synchronously on the
//! UI thread.
//!
//! ERROR HANDLING
//! ==============
//! Expected failures (bad credentials, validation) come back as
//! [`AuthError`] values. Reads never fail: unreadable or malformed entries
//! count as "no session" and are logged.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::auth::{AuthError, AuthProvider, User};
use crate::router::guard::SessionCheck;
use crate::storage::KeyValueStore;
use crate::util::clock;

use super::config::SessionConfig;
use super::token::SessionToken;

/// Session state persisted under two keys: an opaque token and the profile.
pub struct SessionStore<S, P> {
    storage: S,
    provider: P,
    config: SessionConfig,
    clock: fn() -> u64,
}

impl<S, P> SessionStore<S, P>
where
    S: KeyValueStore,
    P: AuthProvider,
{
    /// Store with default keys and the wall clock.
    pub fn new(storage: S, provider: P) -> Self {
        Self { storage, provider, config: SessionConfig::default(), clock: clock::now_millis }
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the millisecond clock used when issuing tokens.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Verify credentials with the provider and start a session.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] on mismatch, or
    /// [`AuthError::Storage`] when the session cannot be written.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = match self.provider.verify(email, password) {
            Ok(user) => user,
            Err(e) => {
                log::debug!("login rejected: {e}");
                return Err(e);
            }
        };
        self.persist(&user)?;
        log::info!("login succeeded for {}", user.email);
        Ok(user)
    }

    /// Validate the form and start a session for the new profile.
    ///
    /// There is no registry, so any valid submission succeeds.
    ///
    /// # Errors
    ///
    /// The first violated rule ([`AuthError::MissingFields`], then
    /// [`AuthError::PasswordTooShort`]), or [`AuthError::Storage`].
    pub fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        validate_signup(name, email, password, self.config.min_password_len)?;
        let user = User { email: email.to_owned(), name: name.to_owned() };
        self.persist(&user)?;
        log::info!("signup succeeded for {}", user.email);
        Ok(user)
    }

    /// Clear both session keys. Safe to call repeatedly.
    pub fn logout(&self) {
        for key in [&self.config.session_key, &self.config.user_key] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("logout could not clear {key}: {e}");
            }
        }
        log::info!("logged out");
    }

    /// True when a non-empty session token is stored.
    pub fn is_authenticated(&self) -> bool {
        match self.storage.get(&self.config.session_key) {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("session token unreadable: {e}");
                false
            }
        }
    }

    /// Stored profile, or `None` when absent, unreadable, or malformed.
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.storage.get(&self.config.user_key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("stored profile unreadable: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring malformed stored profile: {e}");
                None
            }
        }
    }

    fn persist(&self, user: &User) -> Result<(), AuthError> {
        let profile = serde_json::to_string(user).map_err(|e| AuthError::Encode(e.to_string()))?;
        let token = SessionToken::issue(&user.email, (self.clock)());

        self.storage.set(&self.config.session_key, token.as_str())?;
        if let Err(e) = self.storage.set(&self.config.user_key, &profile) {
            // The old profile may still be stored; clear both so neither half survives.
            for key in [&self.config.session_key, &self.config.user_key] {
                if let Err(rollback) = self.storage.remove(key) {
                    log::warn!("could not roll back {key}: {rollback}");
                }
            }
            return Err(e.into());
        }
        Ok(())
    }
}

impl<S, P> SessionCheck for SessionStore<S, P>
where
    S: KeyValueStore,
    P: AuthProvider,
{
    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }
}

/// Signup form rules, checked in order.
///
/// # Errors
///
/// [`AuthError::MissingFields`] if any field is empty, otherwise
/// [`AuthError::PasswordTooShort`] if the password has fewer than
/// `min_password_len` characters.
pub fn validate_signup(name: &str, email: &str, password: &str, min_password_len: usize) -> Result<(), AuthError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if password.chars().count() < min_password_len {
        return Err(AuthError::PasswordTooShort { min: min_password_len });
    }
    Ok(())
}
