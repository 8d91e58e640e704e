use super::*;
use crate::auth::{MOCK_NAME, MockAuthProvider};
use crate::storage::MemoryStorage;

fn store() -> SessionStore<MemoryStorage, MockAuthProvider> {
    SessionStore::new(MemoryStorage::new(), MockAuthProvider::default())
}

#[test]
fn submit_login_success_returns_authenticated_state() {
    let state = submit_login(&store(), MOCK_EMAIL, MOCK_PASSWORD).unwrap();
    assert!(state.authenticated);
    assert_eq!(state.display_name(), MOCK_NAME);
}

#[test]
fn submit_login_failure_returns_message() {
    assert_eq!(submit_login(&store(), MOCK_EMAIL, "nope"), Err("Invalid email or password".to_owned()));
}
