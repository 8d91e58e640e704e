#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Opaque "logged in" marker.
///
/// Standard base64 of `"{email}:{issued_at_ms}"`. Only its presence matters;
/// nothing ever verifies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    #[must_use]
    pub fn issue(email: &str, issued_at_ms: u64) -> Self {
        Self(STANDARD.encode(format!("{email}:{issued_at_ms}")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
