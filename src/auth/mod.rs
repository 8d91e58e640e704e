//! Identity types and credential verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store asks an [`AuthProvider`] whether an email/password pair
//! is valid and persists whatever [`User`] comes back. Swapping the provider
//! is how a real backend would be wired in; the guard and pages never see it.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod mock;

pub use mock::{MOCK_EMAIL, MOCK_NAME, MOCK_PASSWORD, MockAuthProvider};

use serde::{Deserialize, Serialize};

use crate::storage::StorageError;

/// Profile persisted alongside the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

/// Expected failures from login and signup.
///
/// The `Display` text is what the forms show the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("All fields are required")]
    MissingFields,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("profile could not be encoded: {0}")]
    Encode(String),
    #[error("session could not be saved: {0}")]
    Storage(#[from] StorageError),
}

/// Verifies credentials and returns the matching profile.
pub trait AuthProvider {
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the pair is not
    /// recognized.
    fn verify(&self, email: &str, password: &str) -> Result<User, AuthError>;
}

impl<P: AuthProvider + ?Sized> AuthProvider for &P {
    fn verify(&self, email: &str, password: &str) -> Result<User, AuthError> {
        (**self).verify(email, password)
    }
}

impl<P: AuthProvider + ?Sized> AuthProvider for Box<P> {
    fn verify(&self, email: &str, password: &str) -> Result<User, AuthError> {
        (**self).verify(email, password)
    }
}
