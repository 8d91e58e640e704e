use super::*;

// =============================================================
// AuthError messages
// =============================================================

#[test]
fn invalid_credentials_message() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
}

#[test]
fn missing_fields_message() {
    assert_eq!(AuthError::MissingFields.to_string(), "All fields are required");
}

#[test]
fn password_too_short_message_includes_minimum() {
    assert_eq!(AuthError::PasswordTooShort { min: 6 }.to_string(), "Password must be at least 6 characters");
}

#[test]
fn storage_error_converts_into_auth_error() {
    let err: AuthError = StorageError::Unavailable.into();
    assert_eq!(err, AuthError::Storage(StorageError::Unavailable));
    assert_eq!(err.to_string(), "session could not be saved: storage is unavailable");
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_serializes_as_email_and_name() {
    let user = User { email: "a@b.c".to_owned(), name: "Ann".to_owned() };
    assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"email":"a@b.c","name":"Ann"}"#);
}

#[test]
fn user_ignores_unknown_fields() {
    let user: User = serde_json::from_str(r#"{"email":"a@b.c","name":"Ann","role":"admin"}"#).unwrap();
    assert_eq!(user.name, "Ann");
}

// =============================================================
// Provider forwarding
// =============================================================

#[test]
fn boxed_provider_forwards_verify() {
    let provider: Box<dyn AuthProvider> = Box::new(MockAuthProvider::default());
    assert!(provider.verify("test@example.com", "password123").is_ok());
    assert!(provider.verify("test@example.com", "nope").is_err());
}
