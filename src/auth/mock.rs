#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use super::{AuthError, AuthProvider, User};

pub const MOCK_EMAIL: &str = "test@example.com";
pub const MOCK_PASSWORD: &str = "password123";
pub const MOCK_NAME: &str = "Test User";

/// Single hardcoded account. Stands in for a real backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockAuthProvider {
    email: String,
    password: String,
    name: String,
}

impl MockAuthProvider {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into(), name: name.into() }
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new(MOCK_EMAIL, MOCK_PASSWORD, MOCK_NAME)
    }
}

impl AuthProvider for MockAuthProvider {
    fn verify(&self, email: &str, password: &str) -> Result<User, AuthError> {
        // Exact match, no trimming or case folding.
        if email == self.email && password == self.password {
            Ok(User { email: self.email.clone(), name: self.name.clone() })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
